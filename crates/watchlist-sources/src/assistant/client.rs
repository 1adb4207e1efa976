use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::assistant::api;
use crate::error::SourceError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct AssistantClient {
    client: Arc<Client>,
    api_key: String,
    model: String,
}

impl AssistantClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client: Arc::new(client),
            api_key,
            model,
        }
    }

    pub async fn ask(&self, message: &str) -> Result<String, SourceError> {
        api::generate_reply(&self.client, &self.api_key, &self.model, message)
            .await
            .map_err(|e| SourceError::new(format!("{}", e)))
    }
}
