//! Property references carried by enquiries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The subset of a property that an enquiry stores.
///
/// Any other property fields the server embeds are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial property reference supplied when creating an enquiry.
///
/// Only `property_id` is required. `user_id` is the owner of the listing
/// and becomes the enquiry's recipient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyRef {
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl PropertyRef {
    /// Reference a property by id only.
    pub fn new(property_id: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            ..Self::default()
        }
    }

    /// Set the property's display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the owning user, who receives the enquiry.
    pub fn with_owner(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// The `{ property_id, name }` pair stored on the enquiry.
    pub fn summary(&self) -> PropertySummary {
        PropertySummary {
            property_id: self.property_id.clone(),
            name: self.name.clone(),
            extra: Map::new(),
        }
    }
}
