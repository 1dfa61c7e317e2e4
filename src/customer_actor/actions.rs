//! Custom actions for the Customer actor.
//!
//! These are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! in [`entity`](super::entity).

/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Records an inbound message and marks the customer as interacted.
    ///
    /// Applied inside the actor, so of two simultaneous first messages only one
    /// observes the `New` state.
    CheckIn,
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerActionResult {
    /// `first_contact` is true only for the message that moved the customer out of `New`.
    CheckIn { first_contact: bool },
}
