// HTTP client for the remote analysis backend
use crate::application::analysis_gateway::AnalysisGateway;
use crate::domain::insights::AnalysisPayload;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct AnalysisApiClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

impl AnalysisApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnalysisGateway for AnalysisApiClient {
    async fn analyze_file(&self, file_name: &str, contents: Vec<u8>) -> Result<AnalysisPayload> {
        let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("Failed to send analyze request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Analysis request failed with status {}: {}", status, body);
        }

        let data = response
            .json::<Value>()
            .await
            .context("Failed to parse analysis response")?;

        // The backend signals some failures inside a 200 body
        if let Some(error) = data.get("error").and_then(Value::as_str) {
            anyhow::bail!("Analysis failed: {}", error);
        }

        match data {
            Value::Object(payload) => Ok(payload),
            other => anyhow::bail!("Unexpected analysis response shape: {}", other),
        }
    }

    async fn send_chat_message(
        &self,
        message: &str,
        dataset_info: &AnalysisPayload,
    ) -> Result<String> {
        let body = serde_json::json!({
            "message": message,
            "dataset_info": dataset_info,
        });

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .context("Failed to send chat request")?;

        if !response.status().is_success() {
            anyhow::bail!("Chat request failed with status {}", response.status());
        }

        let data = response
            .json::<ChatResponse>()
            .await
            .context("Failed to parse chat response")?;

        Ok(data.response)
    }
}
