//! Enquiry entity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::property::{PropertyRef, PropertySummary};

/// A message from a prospective tenant or buyer to a property owner.
///
/// Fields the client does not model are kept in `extra` so an enquiry
/// returned by the server survives a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub enquiry_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<PropertySummary>,
    /// Recipient user id.
    #[serde(rename = "userTo", default, skip_serializing_if = "Option::is_none")]
    pub user_to: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Enquiry {
    /// Minimal enquiry with only an id, unread.
    pub fn new(enquiry_id: impl Into<String>) -> Self {
        Self {
            enquiry_id: enquiry_id.into(),
            subject: None,
            message: None,
            property: None,
            user_to: None,
            read: false,
            extra: Map::new(),
        }
    }

    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Display title: subject, else the property name, else the id.
    pub fn title(&self) -> &str {
        self.subject
            .as_deref()
            .or_else(|| self.property.as_ref().and_then(|p| p.name.as_deref()))
            .unwrap_or(&self.enquiry_id)
    }
}

/// The fields a user fills in before sending an enquiry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnquiryDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnquiryDraft {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Request body for creating an enquiry.
///
/// Serializes as the draft's fields merged with
/// `{ "property": { property_id, name }, "userTo": owner }`.
#[derive(Debug, Clone, Serialize)]
pub struct NewEnquiry<'a> {
    #[serde(flatten)]
    pub draft: &'a EnquiryDraft,
    pub property: PropertySummary,
    #[serde(rename = "userTo", skip_serializing_if = "Option::is_none")]
    pub user_to: Option<String>,
}

impl<'a> NewEnquiry<'a> {
    pub fn new(draft: &'a EnquiryDraft, property: &PropertyRef) -> Self {
        Self {
            draft,
            property: property.summary(),
            user_to: property.user_id.clone(),
        }
    }
}

/// Request body for marking an enquiry as read.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReadUpdate {
    pub read: bool,
}

impl ReadUpdate {
    pub const READ: ReadUpdate = ReadUpdate { read: true };
}
