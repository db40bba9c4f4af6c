//! Chat data models

use serde::{Deserialize, Serialize};

use crate::types::ChatRole;

/// A single message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}
