//! # Lifecycle
//!
//! Spins up the actors, wires their dependencies and tears them down.
//!
//! - [`OrderingSystem`] owns the actor tasks.
//! - [`FrontDesk`] is the cloneable handle that turns an inbound text into a [`Reply`](crate::engine::Reply).
//! - [`setup_tracing`] installs the log subscriber.

pub mod front_desk;
pub mod ordering_system;
pub mod tracing;

pub use front_desk::FrontDesk;
pub use ordering_system::{OrderingSystem, SystemError, DEFAULT_BUFFER};
pub use self::tracing::setup_tracing;
