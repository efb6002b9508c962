//! Shared test utilities for integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use pl_api::{ApiRequest, Transport};
use pl_core::error::{PlError, PlResult};
use pl_services::{EnquiryStore, EventBus, SessionHandle};

struct Scripted {
    result: PlResult<Value>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Transport that answers requests from a queue of canned results and
/// records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a reply that resolves immediately.
    pub fn reply(&self, result: PlResult<Value>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted { result, gate: None });
    }

    /// Queue a reply that resolves only after the returned sender fires.
    pub fn reply_gated(&self, result: PlResult<Value>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted { result, gate: Some(rx) });
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> PlResult<Value> {
        self.requests.lock().unwrap().push(request);
        let scripted = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request: no reply scripted");
        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}

/// Build a store over the scripted transport.
pub fn create_store(transport: &Arc<ScriptedTransport>, session: SessionHandle) -> (EnquiryStore, EventBus) {
    let bus = EventBus::new(64);
    let store = EnquiryStore::new(transport.clone(), Arc::new(session), bus.clone());
    (store, bus)
}

/// A server-side enquiry as JSON.
pub fn enquiry_json(id: &str, read: bool) -> Value {
    json!({
        "enquiry_id": id,
        "subject": format!("About {id}"),
        "message": "Is it still available?",
        "property": {"property_id": format!("p-{id}"), "name": "Sea View"},
        "userTo": "owner-1",
        "read": read
    })
}

/// A list envelope as the server returns it.
pub fn list_reply(entries: &[Value]) -> PlResult<Value> {
    Ok(json!({ "data": entries }))
}

/// A non-2xx failure carrying a JSON error body.
pub fn server_error(status: u16, message: &str) -> PlResult<Value> {
    Err(PlError::ServerError {
        status,
        message: message.to_string(),
        payload: Some(json!({ "status": status, "message": message })),
    })
}

/// A failure before any response arrived.
pub fn network_error() -> PlResult<Value> {
    Err(PlError::Http("connection failed: connection refused".into()))
}

/// Fill the store's cache with `entries` through a successful fetch.
pub async fn seed(store: &EnquiryStore, transport: &ScriptedTransport, entries: &[Value]) {
    transport.reply(list_reply(entries));
    store.fetch().await.expect("seed fetch failed");
}
