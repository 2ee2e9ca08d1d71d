use std::future::Future;
use std::sync::Arc;

use prelude_core::errors::PreludeResult;

use super::request::{ApiRequest, ApiResponse};

/// Performs one API request with credentials attached.
///
/// Implementations own everything below request shaping: authentication,
/// connection reuse, timeouts, retries. A non-2xx answer must surface as an
/// error, never as an `Ok` response.
pub trait AuthenticatedClient: Send + Sync {
    fn send(&self, request: ApiRequest)
        -> impl Future<Output = PreludeResult<ApiResponse>> + Send;
}

impl<C: AuthenticatedClient> AuthenticatedClient for Arc<C> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = PreludeResult<ApiResponse>> + Send {
        (**self).send(request)
    }
}
