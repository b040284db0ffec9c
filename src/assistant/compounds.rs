use crate::assistant::{ApiError, ChemistryBackend, FetchState};
use crate::chemistry::ElementRecord;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// One compound suggested by the assistant for the selected element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInfo {
    pub formula: String,
    pub name: String,
    pub ratio: String,
    pub description: String,
}

/// Identifies one compound request. Responses carrying an older ticket are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompoundTicket {
    pub request_id: u64,
    pub atomic_number: u8,
}

/// Compound panel state for the current selection.
#[derive(Debug, Default)]
pub struct CompoundFetcher {
    state: FetchState<Vec<CompoundInfo>>,
    current: Option<CompoundTicket>,
    next_request_id: u64,
}

impl CompoundFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `atomic_number`, dropping whatever was shown before.
    pub fn begin(&mut self, atomic_number: u8) -> CompoundTicket {
        self.next_request_id += 1;
        let ticket = CompoundTicket {
            request_id: self.next_request_id,
            atomic_number,
        };
        self.current = Some(ticket);
        self.state = FetchState::Loading;
        ticket
    }

    /// Applies a response if it belongs to the current request. Failures
    /// end up as an empty panel, never as an error shown to the user.
    pub fn resolve(
        &mut self,
        ticket: CompoundTicket,
        result: Result<Vec<CompoundInfo>, ApiError>,
    ) -> bool {
        if self.current != Some(ticket) {
            info!(
                "dropping stale compound response for element {} (request {})",
                ticket.atomic_number, ticket.request_id
            );
            return false;
        }

        self.state = match result {
            Ok(compounds) => FetchState::Succeeded(compounds),
            Err(err) => {
                warn!(
                    "compound lookup for element {} failed: {err}",
                    ticket.atomic_number
                );
                FetchState::Failed
            }
        };
        true
    }

    /// Forgets the current request; any late response becomes stale.
    pub fn reset(&mut self) {
        self.current = None;
        self.state = FetchState::Idle;
    }

    pub fn state(&self) -> &FetchState<Vec<CompoundInfo>> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn current_element(&self) -> Option<u8> {
        self.current.map(|ticket| ticket.atomic_number)
    }

    /// Compounds to display; empty while loading, after a failure, or when idle.
    pub fn compounds(&self) -> &[CompoundInfo] {
        match &self.state {
            FetchState::Succeeded(compounds) => compounds,
            _ => &[],
        }
    }
}

/// Removes markdown code fences a model may wrap around its JSON.
pub fn strip_code_fences(content: &str) -> String {
    content.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parses the assistant's reply as a JSON array of compounds.
pub fn parse_compounds(content: &str) -> Result<Vec<CompoundInfo>, ApiError> {
    let cleaned = strip_code_fences(content);
    serde_json::from_str(&cleaned).map_err(|err| ApiError::Malformed(err.to_string()))
}

/// One-shot lookup that never fails: errors are logged and read as "no compounds".
pub async fn fetch_compounds<B: ChemistryBackend>(
    backend: &B,
    element: &ElementRecord,
) -> Vec<CompoundInfo> {
    match backend.compounds(element).await {
        Ok(compounds) => compounds,
        Err(err) => {
            warn!("compound lookup for {} failed: {err}", element.name);
            Vec::new()
        }
    }
}
