use super::FrontDesk;
use crate::clients::{ConversationClient, CustomerClient};
use crate::conversation_actor::{ConversationContext, ConversationError};
use crate::customer_actor::CustomerError;
use crate::domain::{CustomerId, MenuCatalog};
use crate::engine::Reply;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Default capacity of each actor's request channel.
pub const DEFAULT_BUFFER: usize = 32;

/// Errors surfaced by the running system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Conversation(#[from] ConversationError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// Starts, wires and stops the actors behind the SMS service.
///
/// # Architecture
///
/// - **Customer Actor**: the interaction tracker, one entry per phone number
/// - **Conversation Actor**: one order per customer, driven by the engine; its
///   context holds the menu and a `CustomerClient`
///
/// # Example
///
/// ```ignore
/// let system = OrderingSystem::new(MenuCatalog::pizzeria());
/// let reply = system.handle_inbound("+15551234567".into(), "hi").await?;
/// assert_eq!(reply, Reply::Welcome);
/// system.shutdown().await?;
/// ```
pub struct OrderingSystem {
    pub customer_client: CustomerClient,
    pub conversation_client: ConversationClient,
    catalog: Arc<MenuCatalog>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderingSystem {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self::with_buffer(catalog, DEFAULT_BUFFER)
    }

    /// Spawns both actors with request channels of `buffer_size`.
    pub fn with_buffer(catalog: MenuCatalog, buffer_size: usize) -> Self {
        let catalog = Arc::new(catalog);

        // 1. Create actors
        let (customer_actor, customer_client) = crate::customer_actor::new(buffer_size);
        let (conversation_actor, conversation_client) = crate::conversation_actor::new(buffer_size);

        // 2. Start actors with injected context
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let conversation_handle = tokio::spawn(conversation_actor.run(ConversationContext {
            catalog: catalog.clone(),
            customers: customer_client.clone(),
        }));

        info!(menu_items = catalog.len(), buffer_size, "Ordering system started");

        Self {
            customer_client,
            conversation_client,
            catalog,
            handles: vec![customer_handle, conversation_handle],
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// A handle for serving inbound messages.
    pub fn front_desk(&self) -> FrontDesk {
        FrontDesk::new(self.customer_client.clone(), self.conversation_client.clone())
    }

    /// See [`FrontDesk::handle_inbound`].
    pub async fn handle_inbound(&self, from: CustomerId, body: &str) -> Result<Reply, SystemError> {
        self.front_desk().handle_inbound(from, body).await
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the conversation actor's channel; when it
    /// exits it drops its own `CustomerClient`, which closes the customer actor.
    /// Any [`FrontDesk`] still alive keeps the actors running, so this waits
    /// until those are dropped too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down ordering system...");

        drop(self.conversation_client);
        drop(self.customer_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Ordering system shutdown complete.");
        Ok(())
    }
}
