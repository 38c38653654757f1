//! Client state machine.
//!
//! The dashboard holds exactly one [`AppController`]. Every user intent is a [`Command`]
//! fed through [`AppController::dispatch`], which updates state synchronously and may hand
//! back a [`Request`] for the shell to run. When that request finishes its [`Response`] goes
//! through [`AppController::resolve`]. No I/O happens in this module, which keeps the
//! transitions testable without a renderer.
//!
//! Overlapping history fetches are sequenced with a generation counter: each selection or
//! upload bumps it, and a summary response carrying an older generation is dropped. The
//! record the user asked for last is the one that stays on screen, regardless of which
//! response arrives last.

pub mod effects;

use api::{EquipmentResult, RecordId};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    #[default]
    Empty,
    Loaded(EquipmentResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    UploadCompleted(EquipmentResult),
    HistorySelected(RecordId),
    DownloadRequested,
}

/// Work the shell must perform on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Summary { id: RecordId, generation: u64 },
    Report { id: RecordId },
}

#[derive(Debug)]
pub enum Response {
    Summary {
        id: RecordId,
        generation: u64,
        outcome: anyhow::Result<EquipmentResult>,
    },
    Report {
        id: RecordId,
        outcome: anyhow::Result<Vec<u8>>,
    },
}

/// Side effect requested after a response has been applied.
#[derive(Debug, PartialEq)]
pub enum Followup {
    Nothing,
    SaveReport { file_name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppController {
    state: AppState,
    generation: u64,
    /// Whether the loaded result arrived through an upload rather than a history pick.
    from_upload: bool,
}

impl AppController {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current(&self) -> Option<&EquipmentResult> {
        match &self.state {
            AppState::Loaded(result) => Some(result),
            AppState::Empty => None,
        }
    }

    /// The current result, only while it is the one the last upload produced.
    pub fn uploaded(&self) -> Option<&EquipmentResult> {
        self.current().filter(|_| self.from_upload)
    }

    pub fn dispatch(&mut self, command: Command) -> Option<Request> {
        match command {
            Command::UploadCompleted(result) => {
                self.generation += 1;
                tracing::debug!(id = %result.id, "result replaced by upload");
                self.state = AppState::Loaded(result);
                self.from_upload = true;
                None
            }
            Command::HistorySelected(id) => {
                self.generation += 1;
                tracing::debug!(%id, generation = self.generation, "fetching summary");
                Some(Request::Summary {
                    id,
                    generation: self.generation,
                })
            }
            Command::DownloadRequested => match self.current() {
                Some(result) => Some(Request::Report {
                    id: result.id.clone(),
                }),
                None => {
                    tracing::debug!("download ignored: nothing loaded");
                    None
                }
            },
        }
    }

    pub fn resolve(&mut self, response: Response) -> Followup {
        match response {
            Response::Summary {
                id,
                generation,
                outcome,
            } => {
                if generation != self.generation {
                    if let Err(err) = &outcome {
                        tracing::error!("error fetching summary {id}: {err:#}");
                    }
                    tracing::debug!(
                        %id,
                        generation,
                        latest = self.generation,
                        "discarding stale summary"
                    );
                    return Followup::Nothing;
                }
                match outcome {
                    Ok(result) => {
                        self.state = AppState::Loaded(result);
                        self.from_upload = false;
                    }
                    Err(err) => tracing::error!("error fetching summary {id}: {err:#}"),
                }
                Followup::Nothing
            }
            Response::Report { id, outcome } => match outcome {
                Ok(bytes) => Followup::SaveReport {
                    file_name: id.report_file_name(),
                    bytes,
                },
                Err(err) => {
                    tracing::error!("error downloading report {id}: {err:#}");
                    Followup::Nothing
                }
            },
        }
    }
}
