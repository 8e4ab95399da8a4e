use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteProbe {
    Passed,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionReport {
    pub token_configured: bool,
    /// Most recent skill icons, newest first.
    pub recent: Vec<Value>,
    pub write_probe: WriteProbe,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckConnectionError {
    #[error("Read probe failed: {0}")]
    ReadFailed(String),
}

#[async_trait]
pub trait CheckConnectionUseCase: Send + Sync {
    async fn execute(&self) -> Result<ConnectionReport, CheckConnectionError>;
}
