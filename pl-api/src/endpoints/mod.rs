//! API endpoint modules organized by resource.
//!
//! Each module provides typed methods for a group of related server endpoints.

pub mod enquiries;
