use crate::client::header_bundle;
use crate::config::{AppConfig, REQUEST_TIMEOUT};
use reqwest::header::HeaderMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
    pub headers: HeaderMap,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            config: Arc::new(config),
            http,
            headers: header_bundle(),
        })
    }
}
