pub mod credential;
pub mod local;

pub use credential::{mask_key, CredentialStore, ValidationStatus, CREDENTIAL_KEY};
pub use local::{default_storage_path, LocalStorage, StoreError};
