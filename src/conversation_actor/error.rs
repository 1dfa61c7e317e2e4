//! Error types for the Conversation actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during conversation operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConversationError {
    /// No conversation is open for this customer.
    #[error("Conversation not found: {0}")]
    NotFound(String),

    /// A conversation is already open for this customer.
    #[error("Conversation already open: {0}")]
    AlreadyOpen(String),

    /// The interaction tracker has never heard from this customer.
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ConversationError {
    fn from(msg: String) -> Self {
        ConversationError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for ConversationError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ConversationError::NotFound(id),
            FrameworkError::AlreadyExists(id) => ConversationError::AlreadyOpen(id),
            // Hook failures come back boxed; recover our own variant when we can.
            FrameworkError::EntityError(source) => match source.downcast::<ConversationError>() {
                Ok(inner) => *inner,
                Err(other) => ConversationError::ActorCommunicationError(other.to_string()),
            },
            other => ConversationError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_conversation_errors() {
        assert_eq!(
            ConversationError::from(FrameworkError::NotFound("+1".into())),
            ConversationError::NotFound("+1".into())
        );
        assert_eq!(
            ConversationError::from(FrameworkError::AlreadyExists("+1".into())),
            ConversationError::AlreadyOpen("+1".into())
        );
        assert_eq!(
            ConversationError::from(FrameworkError::EntityError(Box::new(
                ConversationError::UnknownCustomer("+1".into())
            ))),
            ConversationError::UnknownCustomer("+1".into())
        );
        assert!(matches!(
            ConversationError::from(FrameworkError::EntityError(Box::new(std::io::Error::other("disk")))),
            ConversationError::ActorCommunicationError(msg) if msg == "disk"
        ));
        assert!(matches!(
            ConversationError::from(FrameworkError::ActorClosed),
            ConversationError::ActorCommunicationError(_)
        ));
    }
}
