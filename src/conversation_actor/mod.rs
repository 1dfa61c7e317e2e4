//! # Conversation Actor
//!
//! Holds one [`Conversation`] (the order being built plus its selection cursor)
//! per customer and runs the [`engine`](crate::engine) on every inbound text.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Conversation`]
//! - [`error`] - [`ConversationError`]
//! - [`actions`] - [`ConversationAction::HandleMessage`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is a [`ConversationContext`]: the shared menu and a
//! [`CustomerClient`](crate::clients::CustomerClient), used by `on_create` to
//! refuse conversations for customers the interaction tracker has never seen.
//!
//! ```rust,ignore
//! let (actor, client) = conversation_actor::new(32);
//! tokio::spawn(actor.run(ConversationContext { catalog, customers }));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::ConversationContext;
pub use error::*;

use crate::clients::ConversationClient;
use crate::domain::Conversation;
use crate::framework::ResourceActor;

/// Creates a new Conversation actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Conversation>, ConversationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ConversationClient::new(generic_client))
}
