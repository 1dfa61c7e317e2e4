//! # Customer Actor
//!
//! The interaction tracker: one [`Customer`] entry per phone number that has
//! texted in, recording whether the one-time welcome has been sent.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`actions`] - [`CustomerAction::CheckIn`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_sms::customer_actor;
//! use pizza_sms::domain::CustomerId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = CustomerId::from("+15551234567");
//!     assert!(client.check_in(id.clone()).await?);
//!     assert!(!client.check_in(id.clone()).await?);
//!     assert!(client.has_interacted(id).await?);
//!     Ok(())
//! }
//! ```
//!
//! Entries are never removed, so the store grows with every distinct sender
//! for the life of the process.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::domain::Customer;
use crate::framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
