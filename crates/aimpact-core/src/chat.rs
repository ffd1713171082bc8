//! Canned-response chat assistant.
//!
//! There is no model behind the chat. A message is routed by simple
//! substring checks to a greeting or help reply; anything else gets one of a
//! fixed set of general replies, picked at random.
//!
//! Routing checks are unanchored on the lowercased message, so "this"
//! contains "hi" and is treated as a greeting.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// First message of every conversation.
pub const OPENING_MESSAGE: &str = "Hello! I'm your AI assistant. How can I help you today?";

const GREETING_REPLY: &str = "Hello there! It's great to meet you. I'm here to help with any questions or tasks you might have.";

const HELP_REPLY: &str = "I'm here to help! I can assist with various tasks like answering questions, providing explanations, helping with analysis, and much more. What would you like to know?";

/// Replies for messages that are neither greetings nor help requests.
pub const GENERAL_REPLIES: &[&str] = &[
    "That's a great question! Based on my analysis, I'd suggest considering multiple perspectives on this topic.",
    "I understand what you're asking. Let me break this down for you in a clear and helpful way.",
    "Interesting point! Here's what I think about that based on current knowledge and best practices.",
    "I can help you with that. From my understanding, the key factors to consider are...",
    "That's a complex topic, but I'll do my best to provide you with accurate and useful information.",
    "Great question! Let me provide you with a comprehensive answer that addresses your concerns.",
];

const GREETING_MARKERS: &[&str] = &["hello", "hi"];
const HELP_MARKERS: &[&str] = &["help"];

/// What a message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Contains "hello" or "hi".
    Greeting,
    /// Contains "help" (and is not a greeting).
    Help,
    /// Anything else.
    General,
}

impl Intent {
    /// Detect the intent of a message. Greeting takes priority over help.
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

        if contains_any(GREETING_MARKERS) {
            Self::Greeting
        } else if contains_any(HELP_MARKERS) {
            Self::Help
        } else {
            Self::General
        }
    }

    /// Returns the intent as a snake_case label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Help => "help",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks replies for incoming messages.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    rng: StdRng,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatResponder {
    /// Create a responder seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a responder whose general replies are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reply to a message.
    #[tracing::instrument(skip_all, fields(message_len = message.len()))]
    pub fn reply(&mut self, message: &str) -> &'static str {
        let intent = Intent::detect(message);
        tracing::debug!(%intent, "routing chat message");
        match intent {
            Intent::Greeting => GREETING_REPLY,
            Intent::Help => HELP_REPLY,
            Intent::General => GENERAL_REPLIES[self.rng.gen_range(0..GENERAL_REPLIES.len())],
        }
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person chatting.
    User,
    /// The canned assistant.
    Assistant,
}

/// One entry in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    /// Position in the conversation, starting at 1.
    pub id: u64,
    /// Message body.
    pub text: String,
    /// Who sent it.
    pub sender: Sender,
    /// When it was added to the transcript.
    pub timestamp: DateTime<Utc>,
}

/// A chat transcript that starts with the assistant's opening line.
#[derive(Debug, Clone)]
pub struct Conversation {
    responder: ChatResponder,
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation answered by `responder`.
    pub fn new(responder: ChatResponder) -> Self {
        let mut conversation = Self {
            responder,
            messages: Vec::new(),
        };
        conversation.push(OPENING_MESSAGE.to_string(), Sender::Assistant);
        conversation
    }

    /// Add a user message and the assistant's reply; returns the reply.
    ///
    /// Blank messages are rejected and leave the transcript unchanged.
    pub fn send(&mut self, text: &str) -> ContentResult<&Message> {
        if text.trim().is_empty() {
            return Err(ContentError::EmptyMessage);
        }
        self.push(text.to_string(), Sender::User);
        let reply = self.responder.reply(text).to_string();
        Ok(self.push(reply, Sender::Assistant))
    }

    /// All messages so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn push(&mut self, text: String, sender: Sender) -> &Message {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}
