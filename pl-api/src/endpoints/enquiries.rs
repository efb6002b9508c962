//! Enquiry endpoints.
//!
//! Available on any `Transport`, so the store can run against the real
//! client or a scripted one.

use async_trait::async_trait;
use serde_json::Value;

use pl_core::constants::ENQUIRIES_PATH;
use pl_core::error::PlResult;
use pl_models::{Enquiry, EnquiryDraft, NewEnquiry, PropertyRef, ReadUpdate};

use crate::client::{ApiRequest, Transport};
use crate::response::ServerResponse;

/// Path of a single enquiry.
pub fn enquiry_path(enquiry_id: &str) -> String {
    format!("{ENQUIRIES_PATH}/{enquiry_id}")
}

#[async_trait]
pub trait EnquiryApi: Transport {
    /// List the enquiries visible to the session's user.
    async fn list_enquiries(&self, token: &str) -> PlResult<ServerResponse<Vec<Enquiry>>> {
        let value = self.execute(ApiRequest::get(ENQUIRIES_PATH, token)).await?;
        ServerResponse::from_value(value)
    }

    /// Create an enquiry addressed to the owner of `property`.
    async fn create_enquiry(
        &self,
        token: &str,
        draft: &EnquiryDraft,
        property: &PropertyRef,
    ) -> PlResult<ServerResponse<Enquiry>> {
        let body = serde_json::to_value(NewEnquiry::new(draft, property))?;
        let value = self
            .execute(ApiRequest::post(ENQUIRIES_PATH, token, body))
            .await?;
        ServerResponse::from_value(value)
    }

    /// Delete an enquiry.
    ///
    /// Returns `None` when the server answered without a JSON object
    /// (no body, `true`, a bare string, an array).
    async fn delete_enquiry(
        &self,
        token: &str,
        enquiry_id: &str,
    ) -> PlResult<Option<ServerResponse>> {
        let value = self
            .execute(ApiRequest::delete(enquiry_path(enquiry_id), token))
            .await?;
        if !value.is_object() {
            return Ok(None);
        }
        ServerResponse::from_value(value).map(Some)
    }

    /// Mark an enquiry as read and return the updated entry.
    async fn mark_enquiry_read(
        &self,
        token: &str,
        enquiry_id: &str,
    ) -> PlResult<ServerResponse<Enquiry>> {
        let body: Value = serde_json::to_value(ReadUpdate::READ)?;
        let value = self
            .execute(ApiRequest::patch(enquiry_path(enquiry_id), token, body))
            .await?;
        ServerResponse::from_value(value)
    }
}

impl<T: Transport + ?Sized> EnquiryApi for T {}
