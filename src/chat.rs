//! Chat transcript and controller.
//!
//! DESIGN
//! ======
//! `ChatSession` is the session-scoped state: one transcript plus the
//! currently selected professor. It is created at session start and passed
//! into the controller explicitly, never stored globally. Changing the
//! selection leaves the transcript alone.
//!
//! Every accepted submit appends exactly two messages, user then assistant.
//! The backend is infallible by contract, so a failed call still produces
//! the assistant entry (carrying the error text).

use serde::{Deserialize, Serialize};

use crate::api::ChatBackend;
use crate::api::types::ProfessorSummary;

// =============================================================================
// MESSAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// Ordered, append-only (until cleared) conversation history.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pub transcript: Transcript,
    pub selected: Option<ProfessorSummary>,
}

impl ChatSession {
    #[must_use]
    pub fn new(selected: Option<ProfessorSummary>) -> Self {
        Self { transcript: Transcript::default(), selected }
    }
}

/// Template questions offered for quick asks, in display order.
#[must_use]
pub fn example_questions(name: &str) -> [String; 5] {
    [
        format!("What are {name}'s main research areas?"),
        format!("What is {name}'s h-index?"),
        format!("What is {name}'s most cited paper?"),
        format!("How many publications does {name} have?"),
        format!("What is {name}'s current research focus?"),
    ]
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct ChatController<B> {
    backend: B,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `text` about the selected professor.
    ///
    /// Returns the appended assistant message, or `None` without touching the
    /// transcript when the text is blank or nothing is selected.
    pub async fn submit<'s>(&self, session: &'s mut ChatSession, text: &str) -> Option<&'s ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        let scholar_id = session.selected.as_ref()?.scholar_id.clone();

        session.transcript.push(ChatMessage::new(ChatRole::User, text));
        tracing::debug!(%scholar_id, turn = session.transcript.len(), "chat submit");
        let answer = self.backend.chat(&scholar_id, text).await;
        Some(session.transcript.push(ChatMessage::new(ChatRole::Assistant, answer)))
    }

    /// Submit the `index`-th example question for the selected professor.
    pub async fn quick_ask<'s>(&self, session: &'s mut ChatSession, index: usize) -> Option<&'s ChatMessage> {
        let name = session.selected.as_ref()?.name.clone();
        let question = example_questions(&name).into_iter().nth(index)?;
        self.submit(session, &question).await
    }

    pub fn clear(&self, session: &mut ChatSession) {
        session.transcript.clear();
    }

    /// Switch the professor future questions go to. History is kept.
    pub fn select(&self, session: &mut ChatSession, professor: ProfessorSummary) {
        tracing::debug!(professor_id = professor.id, "chat selection changed");
        session.selected = Some(professor);
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
