//! Pure data structures (DTOs) for the ordering domain.
//!
//! [`Customer`] and [`Conversation`] implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait in their actor modules;
//! [`MenuCatalog`] and [`OrderStore`] are plain values.

pub mod conversation;
pub mod customer;
pub mod menu;
pub mod order;

pub use conversation::*;
pub use customer::*;
pub use menu::*;
pub use order::*;
