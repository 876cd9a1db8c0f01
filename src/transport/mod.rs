//! HTTP transport layer for the Vertex AI client.

mod http;
mod error;
mod reqwest;
pub mod endpoints;
pub mod headers;
mod request;

pub use http::{HttpTransport, HttpRequest, HttpResponse, ChunkedStream};
pub use error::TransportError;
pub use reqwest::ReqwestTransport;
pub use endpoints::ApiVersion;
pub use request::RequestBuilder;
