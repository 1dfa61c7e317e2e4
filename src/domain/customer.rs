use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of the person texting in: the raw `From` value of the inbound
/// message (a phone number such as `+15551234567`). Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the customer has already received the one-time welcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    New,
    Interacted,
}

/// A phone number the service has heard from.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
/// (see [`customer_actor`](crate::customer_actor)); the customer actor is the
/// interaction tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub state: InteractionState,
    /// Inbound messages checked in so far, including the first one.
    pub messages_seen: u64,
}

impl Customer {
    pub fn new(id: CustomerId, state: InteractionState) -> Self {
        Self {
            id,
            state,
            messages_seen: 0,
        }
    }

    pub fn has_interacted(&self) -> bool {
        self.state == InteractionState::Interacted
    }
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Default)]
pub struct CustomerCreate {
    pub state: InteractionState,
}

/// Payload for changing a customer's interaction state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub state: Option<InteractionState>,
}
