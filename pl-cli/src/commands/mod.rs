//! CLI command implementations.

pub mod config;
pub mod enquiries;

use std::sync::Arc;

use tracing::{debug, warn};

use pl_api::ApiClient;
use pl_core::config::ConfigHandle;
use pl_core::error::PlResult;
use pl_services::{EnquiryStore, EventBus, Service, SessionHandle};

/// Build and start an enquiry store from config.
pub async fn create_store(config: &ConfigHandle) -> PlResult<EnquiryStore> {
    let cfg = config.read().await;
    let client = ApiClient::new(&cfg.api)?;
    debug!("api root {} (timeout {:?})", client.api_root(), client.timeout());

    let session = SessionHandle::with_token(cfg.session.token.clone());
    if !session.is_authenticated() {
        warn!("no session token configured; requests will be sent unauthenticated");
    }

    let mut store = EnquiryStore::new(Arc::new(client), Arc::new(session), EventBus::default());
    store.init()?;
    Ok(store)
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
