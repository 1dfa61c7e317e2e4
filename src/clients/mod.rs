//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod conversation_client;
pub mod customer_client;

pub use actor_client::*;
pub use conversation_client::*;
pub use customer_client::*;
