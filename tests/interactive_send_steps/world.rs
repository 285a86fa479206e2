//! Shared world state for interactive dispatch BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use nativeflow::interactive::{
    adapters::memory::InMemoryTransport,
    domain::{AuthoringPayload, SendButtonsPayload},
    error::SendError,
    ports::transport::ProtocolMessage,
    services::InteractiveMessageService,
};
use rstest::fixture;

/// Transport type used by the BDD world.
pub type TestTransport = InMemoryTransport<DefaultClock>;

/// Service type used by the BDD world.
pub type TestService = InteractiveMessageService<Arc<TestTransport>, DefaultClock>;

/// Scenario world for interactive dispatch behaviour tests.
pub struct InteractiveWorld {
    pub service: Option<TestService>,
    pub transport: Option<Arc<TestTransport>>,
    pub pending_simple: Option<SendButtonsPayload>,
    pub pending_interactive: Option<AuthoringPayload>,
    pub last_result: Option<Result<ProtocolMessage, SendError>>,
}

impl InteractiveWorld {
    /// Creates a world with no transport and no pending payloads.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            service: None,
            transport: None,
            pending_simple: None,
            pending_interactive: None,
            last_result: None,
        }
    }

    /// Returns the service, failing the step when no transport was set up.
    pub fn service(&self) -> Result<&TestService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing service in scenario world"))
    }

    /// Returns the transport, failing the step when none was set up.
    pub fn transport(&self) -> Result<&TestTransport, eyre::Report> {
        self.transport
            .as_deref()
            .ok_or_else(|| eyre::eyre!("missing transport in scenario world"))
    }
}

impl Default for InteractiveWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> InteractiveWorld {
    InteractiveWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
