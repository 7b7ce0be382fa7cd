//! CompletionProvider trait definition.
//!
//! The seam between the pipeline and the hosted generation endpoint.
//! Implementations live in `datasage-infra` (e.g. `GeminiProvider`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use datasage_types::error::UpstreamError;
use datasage_types::llm::ChatPrompt;

/// A hosted text-generation endpoint.
///
/// `complete` is the sole source of latency and non-determinism in the
/// pipeline; identical prompts are not guaranteed identical completions.
/// No automatic retry: the caller decides whether to surface the failure
/// or try again.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send the assembled prompt and return the model's text verbatim
    /// (transport envelope stripped, nothing else).
    fn complete(
        &self,
        prompt: &ChatPrompt,
    ) -> impl std::future::Future<Output = Result<String, UpstreamError>> + Send;
}
