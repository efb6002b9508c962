//! Listings Models - Data types exchanged with the listings REST API.
//!
//! This crate owns the wire shapes of the enquiries resource: the enquiry
//! itself, the draft a user fills in, and the partial property reference
//! an enquiry is addressed to.

pub mod models;

// Re-export key types
pub use models::enquiry::{Enquiry, EnquiryDraft, NewEnquiry, ReadUpdate};
pub use models::property::{PropertyRef, PropertySummary};
