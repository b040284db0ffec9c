pub mod chat;
pub mod client;
pub mod compounds;

use crate::chemistry::ElementRecord;
use std::future::Future;

pub use chat::{ChatMessage, ChatRequest, ChatSession, Role};
pub use client::{ApiError, OpenRouterClient};
pub use compounds::{CompoundFetcher, CompoundInfo, CompoundTicket, fetch_compounds, parse_compounds};

/// Lifecycle of one asynchronous request as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed,
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Remote service behind the compound panel and the chat window.
pub trait ChemistryBackend: Send + Sync {
    fn compounds(
        &self,
        element: &ElementRecord,
    ) -> impl Future<Output = Result<Vec<CompoundInfo>, ApiError>> + Send;

    /// `history` is the conversation so far, ending with the new user message.
    fn chat(&self, history: &[ChatMessage]) -> impl Future<Output = Result<String, ApiError>> + Send;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned backend: replays scripted outcomes and records what it was asked.
    #[derive(Default)]
    pub struct FakeBackend {
        pub compound_reply: Option<String>,
        pub chat_reply: Option<String>,
        pub chat_calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl FakeBackend {
        pub fn answering(chat_reply: &str) -> Self {
            Self {
                chat_reply: Some(chat_reply.to_owned()),
                ..Self::default()
            }
        }

        pub fn with_compounds(content: &str) -> Self {
            Self {
                compound_reply: Some(content.to_owned()),
                ..Self::default()
            }
        }

        pub fn offline() -> Self {
            Self::default()
        }
    }

    impl ChemistryBackend for FakeBackend {
        async fn compounds(&self, _element: &ElementRecord) -> Result<Vec<CompoundInfo>, ApiError> {
            match &self.compound_reply {
                Some(content) => parse_compounds(content),
                None => Err(ApiError::Status(503)),
            }
        }

        async fn chat(&self, history: &[ChatMessage]) -> Result<String, ApiError> {
            self.chat_calls.lock().unwrap().push(history.to_vec());
            self.chat_reply.clone().ok_or(ApiError::Status(500))
        }
    }
}
