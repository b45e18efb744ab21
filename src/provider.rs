use crate::{Error, GenerationRequest};

/// A remote generative-language service.
///
/// The library consumes this interface; swapping in a fake implementation
/// keeps the generation pipeline testable without a live network dependency.
#[async_trait::async_trait]
pub trait ModelProvider: Send + Sync + 'static {
    /// Enumerate the models the service offers.
    async fn list_models(&self) -> Result<Vec<String>, Error>;

    /// Perform one generation call, returning the raw response text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, Error>;
}
