//! # ActorClient Trait
//!
//! Common interface for domain-specific clients that wrap a [`StateClient`].
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the snapshot read and error mapping.
///
/// # Example
///
/// ```rust
/// use state_actor::{ActorClient, ActorState, FrameworkError, StateClient, Transition};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter(u32);
/// #[derive(Debug)] enum CounterAction { Increment }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CounterError(String);
///
/// impl From<String> for CounterError {
///     fn from(s: String) -> Self { CounterError(s) }
/// }
///
/// #[async_trait]
/// impl ActorState for Counter {
///     type Action = CounterAction;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_action(&self, _: CounterAction, _: &()) -> Result<Transition<Self>, Self::Error> {
///         Ok(Transition::Replace(Counter(self.0 + 1)))
///     }
/// }
///
/// struct CounterClient {
///     inner: StateClient<Counter>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Counter> for CounterClient {
///     type Error = CounterError;
///
///     fn inner(&self) -> &StateClient<Counter> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CounterError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CounterClient) {
///     // snapshot() is provided automatically
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get().await.map_err(Self::map_error)
    }
}
