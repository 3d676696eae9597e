use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::client::error::ClientError;
use crate::client::PetApi;
use crate::config::ApiConfig;
use crate::pet::{Pet, PetDraft, PetId};

/// reqwest-backed [`PetApi`] bound to a single collection URL.
#[derive(Debug, Clone)]
pub struct HttpPetClient {
    client: Client,
    base_url: String,
}

impl HttpPetClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ClientError::Build { source })?;

        Ok(Self { client, base_url })
    }

    /// Collection URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: PetId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        tracing::debug!(method = method, url = %url, "Sending inventory request");

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Connection {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Body is diagnostic only; a failed read leaves it empty.
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            method = method,
            url = %url,
            status = status.as_u16(),
            "Inventory request rejected"
        );
        Err(ClientError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

impl PetApi for HttpPetClient {
    async fn list(&self) -> Result<Vec<Pet>, ClientError> {
        let url = self.base_url.clone();
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        decode(&url, response).await
    }

    async fn create(&self, draft: &PetDraft) -> Result<Pet, ClientError> {
        let url = self.base_url.clone();
        let response = self
            .send("POST", &url, self.client.post(&url).json(draft))
            .await?;
        decode(&url, response).await
    }

    async fn update(&self, id: PetId, draft: &PetDraft) -> Result<Pet, ClientError> {
        let url = self.item_url(id);
        let body = draft.with_id(id);
        let response = self
            .send("PUT", &url, self.client.put(&url).json(&body))
            .await?;
        decode(&url, response).await
    }

    async fn delete(&self, id: PetId) -> Result<(), ClientError> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
}

/// Check that `raw` is an absolute http(s) URL and strip trailing slashes.
pub fn parse_base_url(raw: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(raw).map_err(|err| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}
