//! Transport layer: the authenticated client seam and its reqwest implementation.

pub mod client;
pub mod http_client;
pub mod request;

pub use client::AuthenticatedClient;
pub use http_client::{HttpClient, HttpClientConfig};
pub use request::{ApiRequest, ApiResponse, HttpMethod, RequestOptions};
