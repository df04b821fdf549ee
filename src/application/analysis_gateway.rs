// Gateway trait for the remote analysis backend
use crate::domain::insights::AnalysisPayload;
use async_trait::async_trait;

#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Upload a tabular file and return the computed insight payload.
    async fn analyze_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> anyhow::Result<AnalysisPayload>;

    /// Ask a question about the analyzed dataset.
    async fn send_chat_message(
        &self,
        message: &str,
        dataset_info: &AnalysisPayload,
    ) -> anyhow::Result<String>;
}
