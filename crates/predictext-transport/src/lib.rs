//! # predictext-transport
//!
//! HTTP transport for the prediction panel. One request per call, no retry.
//!
//! | Method | Request |
//! |--------|---------|
//! | POST | `{api_url}/prediction` with body `{"input": "..."}` |
//! | GET | `{api_url}/prediction?input=...` |

pub mod http_client;
pub mod protocol;

pub use http_client::HttpTransport;
pub use protocol::decode_response;
