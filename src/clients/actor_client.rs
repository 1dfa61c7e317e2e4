//! Shared read access for the typed clients.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by [`CustomerClient`](super::CustomerClient) and
/// [`ConversationClient`](super::ConversationClient).
///
/// Entries are never removed once created (customers stay known, a conversation
/// is reset rather than closed), so the only shared operation is a snapshot read.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The actor's own error type.
    type Error: From<String> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Converts a framework failure into [`Self::Error`].
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Snapshot of the entry stored under `id`; `None` if it was never created.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
