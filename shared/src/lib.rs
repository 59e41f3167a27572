//! Types shared by the document Q&A web client.
//!
//! Everything here is target independent so it can be unit tested natively and
//! compiled into the WASM frontend unchanged.

// Wire types for the upload and question endpoints
pub mod api;
pub use api::{endpoints, ApiError, AskResponse, ClientConfig, UploadOutcome, UploadResponse};

// Form field names and user-facing messages
pub mod protocol;
