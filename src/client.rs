use crate::errors::ClientError;
use crate::models::{Account, RemoteResponse};
use chrono::Utc;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, ORIGIN, REFERER,
    USER_AGENT,
};
use serde_json::json;

/// Header bundle the gateway validates as part of its anti-bot checks.
/// Built once; the per-account `Authorization` is layered on top.
pub fn header_bundle() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh-Hans;q=0.9"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://h5-bj.ninebot.com"));
    headers.insert(REFERER, HeaderValue::from_static("https://h5-bj.ninebot.com/"));
    headers.insert("from_platform_1", HeaderValue::from_static("1"));
    headers.insert("language", HeaderValue::from_static("zh"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 15_1 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Mobile/15E148 Segway v6 C 609033420",
        ),
    );
    headers
}

/// Outbound client for one account against the check-in gateway.
pub struct SignClient {
    http: reqwest::Client,
    headers: HeaderMap,
    authorization: String,
    status_url: String,
    sign_url: String,
    device_id: String,
}

impl SignClient {
    pub fn new(http: reqwest::Client, headers: HeaderMap, api_base: &str, account: &Account) -> Self {
        Self {
            http,
            headers,
            authorization: account.authorization.trim().to_string(),
            status_url: format!("{api_base}/portal/api/user-sign/v2/status"),
            sign_url: format!("{api_base}/portal/api/user-sign/v2/sign"),
            device_id: account.device_id.trim().to_string(),
        }
    }

    /// Current sign-in status. The `t` query parameter busts any
    /// intermediate caches.
    pub async fn status(&self) -> Result<RemoteResponse, ClientError> {
        let response = self
            .http
            .get(&self.status_url)
            .query(&[("t", Utc::now().timestamp_millis())])
            .headers(self.headers.clone())
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Perform today's sign-in.
    pub async fn sign(&self) -> Result<RemoteResponse, ClientError> {
        let response = self
            .http
            .post(&self.sign_url)
            .headers(self.headers.clone())
            .header(AUTHORIZATION, &self.authorization)
            .json(&json!({ "deviceId": self.device_id }))
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn parse(response: reqwest::Response) -> Result<RemoteResponse, ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json::<RemoteResponse>().await?)
    }
}
