//! Custom actions for the Conversation actor.

use crate::engine::Reply;

/// Custom actions for Conversation entities.
#[derive(Debug, Clone)]
pub enum ConversationAction {
    /// Runs the conversation engine on one inbound text.
    HandleMessage(String),
}

/// Results from ConversationActions - variants match 1:1 with ConversationAction
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationActionResult {
    HandleMessage(Reply),
}
