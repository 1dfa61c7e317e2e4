//! # Pizza SMS
//!
//! > **Order pizza by text message.**
//!
//! A customer texts the shop's number; the SMS provider posts each message to
//! the [`webhook`], which answers with the reply the [`engine`] picks for that
//! customer's conversation.
//!
//! ## Conversation
//!
//! The first message ever received from a number is answered with a welcome,
//! whatever it says. After that:
//!
//! ```text
//! order  -> What type of pizza would you like?
//! a      -> You've selected Pepperoni Pizza. How many would you like to order?
//! 2      -> You've ordered: 2 Pepperoni Pizza - $12.99 each ...
//! done   -> Thanks for your order! ... Total: $25.98
//! ```
//!
//! `menu` lists the catalog at any point. Every customer has their own order.
//!
//! ## Architecture Notes
//!
//! ### 1. Actors own the state
//! Two [`ResourceActor`](framework::ResourceActor)s hold all mutable state: the
//! customer actor (the interaction tracker, keyed by phone number) and the
//! conversation actor (one [`Conversation`](domain::Conversation) per customer).
//! Each processes its messages sequentially, so there are no locks on domain
//! state and two texts from one customer never interleave.
//!
//! ### 2. The engine is pure
//! [`engine::handle_message`] is a synchronous function from text and
//! conversation to [`Reply`](engine::Reply). All the ordering rules live there
//! and are tested without actors.
//!
//! ### 3. Type-safe errors
//! Each actor has its own error enum ([`CustomerError`](customer_actor::CustomerError),
//! [`ConversationError`](conversation_actor::ConversationError)), converted into
//! [`SystemError`](lifecycle::SystemError) at the [`lifecycle`] layer.
//!
//! ### 4. Observability
//! `tracing` throughout; see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - generic resource actor, client and mocks
//! - [`domain`] - menu, order store, customer and conversation data
//! - [`engine`] - the ordering rules
//! - [`customer_actor`], [`conversation_actor`] - the two actors
//! - [`clients`] - typed clients for each actor
//! - [`lifecycle`] - startup, wiring, shutdown
//! - [`config`] - environment configuration
//! - [`webhook`] - HTTP adapter
//!
//! ## Running
//!
//! ```bash
//! TWILIO_ACCOUNT_SID=AC... TWILIO_AUTH_TOKEN=... RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod conversation_actor;
pub mod customer_actor;
pub mod domain;
pub mod engine;
pub mod framework;
pub mod lifecycle;
pub mod webhook;
