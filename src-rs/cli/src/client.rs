use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    CredentialInfo, GenerateResponse, IdeasRequest, SlotInfo, SolutionRequest, Tab, ValidateRequest,
    ValidateResponse,
};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(|err| err.to_string())?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn validate(&self, api_key: &str) -> Result<ValidateResponse, String> {
        self.post(
            "/credential/validate",
            &ValidateRequest {
                api_key: api_key.to_string(),
            },
        )
    }

    pub fn credential(&self) -> Result<CredentialInfo, String> {
        self.get("/credential")
    }

    pub fn generate(&self, tab: Tab, text: &str) -> Result<GenerateResponse, String> {
        match tab {
            Tab::Ideas => self.post(
                "/ideas",
                &IdeasRequest {
                    prompt: text.to_string(),
                },
            ),
            Tab::Problems => self.post(
                "/solution",
                &SolutionRequest {
                    problem: text.to_string(),
                },
            ),
        }
    }

    pub fn slot(&self, tab: Tab) -> Result<SlotInfo, String> {
        match tab {
            Tab::Ideas => self.get("/ideas"),
            Tab::Problems => self.get("/solution"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, String> {
        let resp = self.client.get(self.url(path)).send().map_err(|err| err.to_string())?;
        decode(resp)
    }

    fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, body: &T) -> Result<R, String> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|err| err.to_string())?;
        decode(resp)
    }
}

fn decode<R: DeserializeOwned>(resp: reqwest::blocking::Response) -> Result<R, String> {
    if resp.status().is_success() {
        resp.json::<R>().map_err(|err| err.to_string())
    } else {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        Err(format!("http {}: {}", status.as_u16(), body))
    }
}
