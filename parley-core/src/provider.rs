//! Core provider trait for LLM interactions

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;
use async_trait::async_trait;

/// The backend collaborator: takes a message list, returns generated text
///
/// Implementations are expected to be cheap to construct. The chat client
/// builds a fresh provider for every exchange.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a request and wait for the complete response
    async fn request(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn request(&self, request: Request) -> Result<Response> {
        (**self).request(request).await
    }
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    async fn request(&self, request: Request) -> Result<Response> {
        (**self).request(request).await
    }
}
