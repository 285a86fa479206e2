//! Transport source holding an optional, pre-built transport.

use std::sync::Arc;

use crate::interactive::{
    error::ConfigurationError,
    ports::transport::{MessageTransport, TransportSource},
};

/// Hands out a transport supplied at construction time.
///
/// An empty source reports [`ConfigurationError::MissingTransport`] on
/// every load.
///
/// # Example
///
/// ```
/// use nativeflow::interactive::adapters::{memory::InMemoryTransport, source::StaticTransportSource};
/// use nativeflow::interactive::ports::transport::TransportSource;
/// use mockable::DefaultClock;
///
/// let missing = StaticTransportSource::<InMemoryTransport<DefaultClock>>::missing();
/// assert!(missing.load().is_err());
/// ```
pub struct StaticTransportSource<T: ?Sized> {
    transport: Option<Arc<T>>,
}

impl<T: ?Sized> StaticTransportSource<T> {
    /// Creates a source handing out `transport`.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Creates a source with no transport.
    #[must_use]
    pub const fn missing() -> Self {
        Self { transport: None }
    }
}

impl<T> TransportSource for StaticTransportSource<T>
where
    T: MessageTransport + ?Sized,
{
    type Transport = T;

    fn load(&self) -> Result<Arc<T>, ConfigurationError> {
        self.transport
            .clone()
            .ok_or(ConfigurationError::MissingTransport)
    }
}
