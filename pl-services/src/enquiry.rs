//! Enquiry store.
//!
//! Owns the in-process copy of the viewer's enquiries and the currently
//! selected enquiry, publishes both to subscribers, and keeps them in sync
//! with the enquiries REST resource.
//!
//! Each operation reads the session token, sends a single request, and only
//! touches the cache once the server has answered. Nothing is held across
//! the request, so overlapping operations apply their changes to whatever
//! the cache holds when their response arrives; a fetch that resolves last
//! replaces everything before it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, error, info};

use pl_api::{EnquiryApi, ServerResponse, Transport};
use pl_core::error::PlResult;
use pl_models::{Enquiry, EnquiryDraft, PropertyRef};

use crate::event_bus::{AppEvent, EventBus};
use crate::observable::Observable;
use crate::service::{Service, ServiceState};
use crate::session::Session;

/// Observable cache of enquiries backed by the REST API.
///
/// Build one per application and share it (`Arc<EnquiryStore>`) with every
/// view that needs enquiry data. Views read and subscribe; only the four
/// operations below mutate.
pub struct EnquiryStore {
    state: ServiceState,
    transport: Arc<dyn Transport>,
    session: Arc<dyn Session>,
    event_bus: EventBus,
    enquiries: Observable<Vec<Enquiry>>,
    selected: Observable<Option<Enquiry>>,
    initial_fetch_done: AtomicBool,
}

impl EnquiryStore {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<dyn Session>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state: ServiceState::Created,
            transport,
            session,
            event_bus,
            enquiries: Observable::new(Vec::new()),
            selected: Observable::new(None),
            initial_fetch_done: AtomicBool::new(false),
        }
    }

    // --- State surface ---

    /// Subscribe to the enquiry list. The receiver holds the current list.
    pub fn enquiries(&self) -> watch::Receiver<Vec<Enquiry>> {
        self.enquiries.subscribe()
    }

    /// Stream of enquiry lists, starting with the current one.
    pub fn enquiries_stream(&self) -> WatchStream<Vec<Enquiry>> {
        self.enquiries.stream()
    }

    /// Current enquiry list.
    pub fn snapshot(&self) -> Vec<Enquiry> {
        self.enquiries.get()
    }

    /// Subscribe to the selected enquiry. Starts out as `None`.
    pub fn selected(&self) -> watch::Receiver<Option<Enquiry>> {
        self.selected.subscribe()
    }

    /// Stream of selections, starting with the current one.
    pub fn selected_stream(&self) -> WatchStream<Option<Enquiry>> {
        self.selected.stream()
    }

    /// Current selection.
    pub fn selected_snapshot(&self) -> Option<Enquiry> {
        self.selected.get()
    }

    /// Whether a fetch has ever succeeded. Never goes back to false.
    pub fn initial_fetch_done(&self) -> bool {
        self.initial_fetch_done.load(Ordering::Acquire)
    }

    /// Look up a cached enquiry by id.
    pub fn enquiry_by_id(&self, enquiry_id: &str) -> Option<Enquiry> {
        self.enquiries
            .with(|list| list.iter().find(|e| e.enquiry_id == enquiry_id).cloned())
    }

    /// Number of cached enquiries not yet read.
    pub fn unread_count(&self) -> usize {
        self.enquiries
            .with(|list| list.iter().filter(|e| e.is_unread()).count())
    }

    // --- Operations ---

    /// Replace the cache with the server's list.
    ///
    /// On failure the cache and the initial-fetch flag keep their values.
    pub async fn fetch(&self) -> PlResult<()> {
        let token = self.session.token();
        let result = self
            .transport
            .list_enquiries(&token)
            .await
            .and_then(ServerResponse::into_data);

        match result {
            Ok(list) => {
                let count = list.len();
                self.enquiries.set(list);
                self.initial_fetch_done.store(true, Ordering::Release);
                debug!("fetched {count} enquiries");
                self.event_bus.emit(AppEvent::EnquiriesLoaded { count });
                Ok(())
            }
            Err(e) => {
                error!("failed to fetch enquiries: {e}");
                Err(e)
            }
        }
    }

    /// Send a new enquiry about `property` and append the created entry.
    ///
    /// Returns the full response envelope.
    pub async fn create(
        &self,
        draft: &EnquiryDraft,
        property: &PropertyRef,
    ) -> PlResult<ServerResponse<Enquiry>> {
        let token = self.session.token();
        let result = self
            .transport
            .create_enquiry(&token, draft, property)
            .await
            .and_then(|resp| {
                let created = resp.data_ref()?.clone();
                Ok((resp, created))
            });

        match result {
            Ok((resp, created)) => {
                let enquiry_id = created.enquiry_id.clone();
                self.enquiries.update(|list| list.push(created));
                debug!("created enquiry {enquiry_id} for property {}", property.property_id);
                self.event_bus.emit(AppEvent::EnquiryCreated { enquiry_id });
                Ok(resp)
            }
            Err(e) => {
                error!("failed to create enquiry for property {}: {e}", property.property_id);
                Err(e)
            }
        }
    }

    /// Delete an enquiry and drop it from the cache.
    ///
    /// The cache only changes when the response envelope says status 200.
    /// Any other successful answer, including an empty body, returns
    /// `Ok(None)` and leaves the cache as it was.
    pub async fn remove(&self, enquiry_id: &str) -> PlResult<Option<ServerResponse>> {
        let token = self.session.token();
        match self.transport.delete_enquiry(&token, enquiry_id).await {
            Ok(Some(resp)) if resp.is_success() => {
                self.enquiries
                    .update(|list| list.retain(|e| e.enquiry_id != enquiry_id));
                debug!("removed enquiry {enquiry_id}");
                self.event_bus.emit(AppEvent::EnquiryRemoved {
                    enquiry_id: enquiry_id.to_string(),
                });
                Ok(Some(resp))
            }
            Ok(_) => {
                debug!("delete of enquiry {enquiry_id} not acknowledged with status 200");
                Ok(None)
            }
            Err(e) => {
                error!("failed to remove enquiry {enquiry_id}: {e}");
                Err(e)
            }
        }
    }

    /// Mark an enquiry read, swap in the server's copy, and select it.
    ///
    /// The selection always becomes the updated enquiry, whatever was
    /// selected before.
    pub async fn mark_read(&self, enquiry_id: &str) -> PlResult<Enquiry> {
        let token = self.session.token();
        let result = self
            .transport
            .mark_enquiry_read(&token, enquiry_id)
            .await
            .and_then(ServerResponse::into_data);

        match result {
            Ok(updated) => {
                self.enquiries.update(|list| {
                    for slot in list.iter_mut().filter(|e| e.enquiry_id == enquiry_id) {
                        *slot = updated.clone();
                    }
                });
                self.selected.set(Some(updated.clone()));
                debug!("marked enquiry {enquiry_id} read");
                self.event_bus.emit(AppEvent::EnquiryRead {
                    enquiry_id: enquiry_id.to_string(),
                });
                Ok(updated)
            }
            Err(e) => {
                error!("failed to mark enquiry {enquiry_id} read: {e}");
                Err(e)
            }
        }
    }
}

impl Service for EnquiryStore {
    fn name(&self) -> &str {
        "enquiries"
    }

    fn state(&self) -> ServiceState {
        self.state
    }

    fn init(&mut self) -> PlResult<()> {
        self.state = self.state.advance(ServiceState::Running)?;
        info!("enquiry store {}", self.state);
        Ok(())
    }

    fn shutdown(&mut self) -> PlResult<()> {
        self.state = self.state.advance(ServiceState::Stopped)?;
        info!(
            "enquiry store stopped ({} cached, {} subscriber(s))",
            self.enquiries.with(Vec::len),
            self.enquiries.subscriber_count()
        );
        Ok(())
    }
}
