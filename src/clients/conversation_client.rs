use crate::clients::actor_client::ActorClient;
use crate::conversation_actor::{ConversationAction, ConversationActionResult, ConversationError};
use crate::domain::{Conversation, ConversationOpen, CustomerId};
use crate::engine::Reply;
use crate::framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Conversation actor.
///
/// # Error Handling
/// Framework errors are converted with `ConversationError::from`, which
/// recovers the entity's own error from a failed `on_create` hook (for example
/// [`ConversationError::UnknownCustomer`]).
#[derive(Clone)]
pub struct ConversationClient {
    inner: ResourceClient<Conversation>,
}

impl ConversationClient {
    pub fn new(inner: ResourceClient<Conversation>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Conversation> for ConversationClient {
    type Error = ConversationError;

    fn inner(&self) -> &ResourceClient<Conversation> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ConversationError::from(e)
    }
}

impl ConversationClient {
    /// Opens an empty conversation for `id`. Opening one that already exists is a no-op.
    #[instrument(skip(self))]
    pub async fn open(&self, id: CustomerId) -> Result<(), ConversationError> {
        debug!("Sending request");
        match self.inner.create(id, ConversationOpen).await.map_err(Self::map_error) {
            Ok(_) | Err(ConversationError::AlreadyOpen(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Runs one inbound text through the customer's conversation.
    #[instrument(skip(self))]
    pub async fn handle_message(&self, id: CustomerId, text: String) -> Result<Reply, ConversationError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ConversationAction::HandleMessage(text))
            .await
            .map_err(Self::map_error)?
        {
            ConversationActionResult::HandleMessage(reply) => Ok(reply),
        }
    }

    /// Snapshot of the customer's conversation, if one is open.
    pub async fn view(&self, id: CustomerId) -> Result<Option<Conversation>, ConversationError> {
        self.get(id).await
    }
}
