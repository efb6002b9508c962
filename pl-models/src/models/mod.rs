//! Entity models.

pub mod enquiry;
pub mod property;
