//! Service lifecycle.
//!
//! A service is created idle, started once by the composition root, and
//! stopped once when the application is done with it. Out-of-order calls
//! are rejected rather than silently ignored.

use pl_core::error::{PlError, PlResult};

/// Lifecycle state of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Created,
    Running,
    Stopped,
}

impl ServiceState {
    /// Move to `next`, allowing only `Created -> Running -> Stopped`.
    pub fn advance(self, next: ServiceState) -> PlResult<ServiceState> {
        match (self, next) {
            (Self::Created, Self::Running) | (Self::Running, Self::Stopped) => Ok(next),
            _ => Err(PlError::Internal(format!(
                "invalid service transition {self} -> {next}"
            ))),
        }
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Stopped => "stopped",
        })
    }
}

/// A long-lived component owned by the composition root.
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    fn state(&self) -> ServiceState;

    /// Start the service. Fails unless it is freshly created.
    fn init(&mut self) -> PlResult<()>;

    /// Stop the service. Fails unless it is running.
    fn shutdown(&mut self) -> PlResult<()>;

    fn is_healthy(&self) -> bool {
        self.state() == ServiceState::Running
    }
}
