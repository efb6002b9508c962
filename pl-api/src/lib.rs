//! Listings API - HTTP client for the listings REST API.
//!
//! This crate provides the `Transport` seam the rest of the client talks
//! through, a reqwest-backed implementation that attaches the session
//! token and custom headers to every request, the common response
//! envelope, and typed methods for the enquiries resource.

pub mod client;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use client::{ApiClient, ApiRequest, Transport};
pub use endpoints::enquiries::EnquiryApi;
pub use response::{ServerError, ServerResponse};
pub use reqwest::Method;
