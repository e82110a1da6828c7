/// Model-enrichment collaborator errors.
///
/// Every variant is recoverable: the orchestrator treats any of these as
/// "no enrichment available" and falls back to synthetic results.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("enrichment transport error: {reason}")]
    Transport { reason: String },

    #[error("enrichment service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed enrichment payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("enrichment timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("no enrichment credential configured")]
    NotConfigured,
}
