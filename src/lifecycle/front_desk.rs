use super::SystemError;
use crate::clients::{ConversationClient, CustomerClient};
use crate::conversation_actor::ConversationError;
use crate::domain::CustomerId;
use crate::engine::Reply;
use tracing::{debug, info, instrument};

/// Entry point for inbound messages: the pair of clients the webhook holds.
///
/// Cheap to clone. While any clone is alive the actors keep running, so drop
/// them before [`OrderingSystem::shutdown`](super::OrderingSystem::shutdown).
#[derive(Clone)]
pub struct FrontDesk {
    customers: CustomerClient,
    conversations: ConversationClient,
}

impl FrontDesk {
    pub fn new(customers: CustomerClient, conversations: ConversationClient) -> Self {
        Self {
            customers,
            conversations,
        }
    }

    pub fn customers(&self) -> &CustomerClient {
        &self.customers
    }

    pub fn conversations(&self) -> &ConversationClient {
        &self.conversations
    }

    /// Produces the reply to one inbound text from `from`.
    ///
    /// The first message a customer ever sends is answered with the welcome,
    /// whatever it says, and opens their conversation. Every later message goes
    /// to the conversation engine.
    #[instrument(skip(self, body), fields(customer_id = %from))]
    pub async fn handle_inbound(&self, from: CustomerId, body: &str) -> Result<Reply, SystemError> {
        debug!(body, "Inbound message");
        if self.customers.check_in(from.clone()).await? {
            self.conversations.open(from).await?;
            info!("New customer welcomed");
            return Ok(Reply::Welcome);
        }

        match self.conversations.handle_message(from.clone(), body.to_string()).await {
            // The first message of this customer is still being welcomed.
            Err(ConversationError::NotFound(_)) => {
                debug!("Conversation not open yet, opening");
                self.conversations.open(from.clone()).await?;
                Ok(self.conversations.handle_message(from, body.to_string()).await?)
            }
            result => Ok(result?),
        }
    }
}
