use crate::assistant::{ApiError, ChemistryBackend, FetchState};
use log::warn;
use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "Greetings. I am Titan AI. Ask me anything about the elements or chemistry.";

pub const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to the neural network. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    /// Shown in the transcript but never sent upstream.
    #[serde(default)]
    pub local: bool,
}

/// Payload for one chat round trip.
#[derive(Clone, Debug)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
}

/// Append-only transcript with at most one request in flight.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    status: FetchState<()>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            status: FetchState::Idle,
        };
        session.push(Role::Assistant, GREETING.to_owned(), true);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn can_send(&self, text: &str) -> bool {
        !self.is_loading() && !text.trim().is_empty()
    }

    /// Appends the user's message right away and hands back the request to
    /// dispatch. Returns `None` for blank input or while a reply is pending.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        if !self.can_send(text) {
            return None;
        }
        self.push(Role::User, text.to_owned(), false);
        self.status = FetchState::Loading;
        let history = self
            .messages
            .iter()
            .filter(|message| !message.local)
            .cloned()
            .collect();
        Some(ChatRequest { history })
    }

    /// Appends the reply, or the fixed fallback on any failure. A failed turn
    /// stays visible but drops out of later history together with the
    /// fallback. Ignored when nothing is pending.
    pub fn resolve(&mut self, result: Result<String, ApiError>) {
        if !self.is_loading() {
            warn!("chat reply arrived with no request pending; ignoring");
            return;
        }
        match result {
            Ok(reply) => {
                self.push(Role::Assistant, reply, false);
                self.status = FetchState::Succeeded(());
            }
            Err(err) => {
                warn!("chat request failed: {err}");
                if let Some(unanswered) = self.messages.last_mut() {
                    unanswered.local = true;
                }
                self.push(Role::Assistant, FALLBACK_REPLY.to_owned(), true);
                self.status = FetchState::Failed;
            }
        }
    }

    /// Full exchange in one call: returns the assistant's text, or `None` when
    /// the input was rejected.
    pub async fn send<B: ChemistryBackend>(&mut self, backend: &B, text: &str) -> Option<String> {
        let request = self.begin_send(text)?;
        let result = backend.chat(&request.history).await;
        self.resolve(result);
        self.messages.last().map(|message| message.text.clone())
    }

    fn push(&mut self, role: Role, text: String, local: bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            local,
        });
    }
}
