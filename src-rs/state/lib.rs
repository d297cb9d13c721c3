pub mod slot;
pub mod types;

pub use slot::ResultSlot;
pub use types::{SlotSnapshot, SlotState};
