//! Entity trait implementation for the Conversation domain type.
//!
//! Each message is handed to [`engine::handle_message`](crate::engine::handle_message)
//! against the customer's own conversation. The actor applies messages one at a
//! time, so two texts from the same customer cannot interleave on one order.

use super::actions::{ConversationAction, ConversationActionResult};
use super::error::ConversationError;
use crate::clients::CustomerClient;
use crate::domain::{Conversation, ConversationOpen, CustomerId, MenuCatalog};
use crate::engine;
use crate::framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Dependencies injected into the Conversation actor at `run()`.
#[derive(Clone)]
pub struct ConversationContext {
    pub catalog: Arc<MenuCatalog>,
    pub customers: CustomerClient,
}

#[async_trait]
impl ActorEntity for Conversation {
    type Id = CustomerId;
    type CreateParams = ConversationOpen;
    type UpdateParams = (); // No updates: all changes go through the engine
    type Action = ConversationAction;
    type ActionResult = ConversationActionResult;
    type Context = ConversationContext;
    type Error = ConversationError;

    fn from_create_params(id: CustomerId, _params: ConversationOpen) -> Result<Self, ConversationError> {
        Ok(Self::new(id))
    }

    /// Only customers the interaction tracker knows about may hold a conversation.
    async fn on_create(&mut self, ctx: &ConversationContext) -> Result<(), ConversationError> {
        let known = ctx
            .customers
            .has_interacted(self.customer_id.clone())
            .await
            .map_err(|e| ConversationError::ActorCommunicationError(e.to_string()))?;
        if !known {
            return Err(ConversationError::UnknownCustomer(self.customer_id.to_string()));
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &ConversationContext) -> Result<(), ConversationError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ConversationAction,
        ctx: &ConversationContext,
    ) -> Result<ConversationActionResult, ConversationError> {
        match action {
            ConversationAction::HandleMessage(text) => {
                let reply = engine::handle_message(&text, self, &ctx.catalog);
                debug!(
                    customer_id = %self.customer_id,
                    ?reply,
                    lines = self.order.len(),
                    "Message handled"
                );
                Ok(ConversationActionResult::HandleMessage(reply))
            }
        }
    }
}
