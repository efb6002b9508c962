//! Listings Services - Client-side state and business logic.
//!
//! This crate provides:
//! - The enquiry store: the in-process copy of the viewer's enquiries and
//!   the currently selected enquiry, kept in sync with the REST API
//! - Observable single-value state with replay to new subscribers
//! - The session collaborator that supplies the auth token
//! - The service lifecycle trait
//! - Event bus (typed change notifications)

pub mod service;
pub mod event_bus;
pub mod observable;
pub mod session;
pub mod enquiry;

// Re-export key types
pub use service::{Service, ServiceState};
pub use event_bus::{AppEvent, EventBus};
pub use observable::Observable;
pub use session::{Session, SessionHandle};
pub use enquiry::EnquiryStore;
