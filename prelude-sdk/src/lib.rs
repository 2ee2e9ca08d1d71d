//! # prelude-sdk
//!
//! Typed async access to the Prelude Detect API.
//!
//! [`DetectController`] turns method calls into requests against `/detect/*`
//! and hands each one to an [`AuthenticatedClient`]. The controller never
//! touches credentials, retries, or timeouts; [`HttpClient`] is the bundled
//! reqwest-backed client that does.

pub mod controllers;
pub mod transport;

pub use controllers::DetectController;
pub use transport::{
    ApiRequest, ApiResponse, AuthenticatedClient, HttpClient, HttpClientConfig, HttpMethod,
    RequestOptions,
};
