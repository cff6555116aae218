// src/state/mod.rs
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use anyhow::Result;
use eframe::egui;

use crate::analysis::AnalysisResult;
use crate::config::AppConfig;
use crate::upload::client::AnalysisClient;
use crate::upload::{self, SelectedFile, UploadEvent, NO_FILE_MESSAGE};

// Where the single allowed in-flight request stands. A second submit while
// InFlight is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    InFlight,
    Done,
    Failed,
}

// Core application state. Only the UI thread writes it; the upload worker
// reports back through the event channel.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub selected_file: Option<SelectedFile>,
    pub result: Option<AnalysisResult>,
    pub error_message: Option<String>,
    pub phase: UploadPhase,

    client: AnalysisClient,
    events_tx: Sender<UploadEvent>,
    events_rx: Receiver<UploadEvent>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = AnalysisClient::new(&config)?;
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            config,
            selected_file: None,
            result: None,
            error_message: None,
            phase: UploadPhase::Idle,
            client,
            events_tx,
            events_rx,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::InFlight
    }

    /// Take a new file selection. An invalid pick clears any previously
    /// accepted file, so the user has to re-select.
    pub fn select_path(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => {
                tracing::debug!("selected {} ({} bytes)", file.name, file.contents.len());
                self.selected_file = Some(file);
            }
            Err(err) => {
                self.selected_file = None;
                self.error_message = Some(err.user_message());
            }
        }
    }

    /// Kick off an upload for the current selection. No file selected is a
    /// local error and never reaches the network.
    pub fn submit(&mut self, ctx: &egui::Context) {
        if self.phase == UploadPhase::InFlight {
            tracing::warn!("submit ignored: an analysis request is already in flight");
            return;
        }

        let Some(file) = self.selected_file.clone() else {
            self.apply(UploadEvent::Failed(NO_FILE_MESSAGE.to_string()));
            return;
        };

        self.apply(UploadEvent::Started);
        upload::spawn_upload(self.client.clone(), file, self.events_tx.clone(), ctx.clone());
    }

    /// Drain worker events without blocking. Called once per frame.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
        }
    }

    /// The single reducer for upload lifecycle events.
    pub fn apply(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Started => {
                self.phase = UploadPhase::InFlight;
                self.error_message = None;
            }
            UploadEvent::Succeeded(result) => {
                self.result = Some(result);
                self.phase = UploadPhase::Done;
            }
            UploadEvent::Failed(message) => {
                self.error_message = Some(message);
                self.phase = UploadPhase::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Breakdown;
    use crate::upload::INVALID_TYPE_MESSAGE;
    use std::io::Write;

    fn state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    fn sample_file() -> SelectedFile {
        SelectedFile {
            name: "sample.py".to_string(),
            extension: "py".to_string(),
            contents: b"print('hi')".to_vec(),
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            overall_score: 85,
            breakdown: Breakdown {
                naming: 8,
                modularity: 18,
                comments: 15,
                formatting: 14,
                reusability: 12,
                best_practices: 18,
            },
            recommendations: vec![],
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = state();
        assert!(state.selected_file.is_none());
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(state.phase, UploadPhase::Idle);
    }

    #[test]
    fn started_clears_a_previous_error() {
        let mut state = state();
        state.apply(UploadEvent::Failed("boom".to_string()));
        assert_eq!(state.phase, UploadPhase::Failed);

        state.apply(UploadEvent::Started);
        assert!(state.error_message.is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn success_stores_the_result_and_ends_loading() {
        let mut state = state();
        state.apply(UploadEvent::Started);
        state.apply(UploadEvent::Succeeded(sample_result()));

        assert_eq!(state.phase, UploadPhase::Done);
        assert!(!state.is_loading());
        assert_eq!(state.result.as_ref().unwrap().overall_score, 85);
    }

    #[test]
    fn failure_keeps_a_stale_result_visible() {
        let mut state = state();
        state.apply(UploadEvent::Succeeded(sample_result()));
        state.apply(UploadEvent::Started);
        state.apply(UploadEvent::Failed("file too large".to_string()));

        assert_eq!(state.error_message.as_deref(), Some("file too large"));
        assert!(state.result.is_some());
        assert_eq!(state.phase, UploadPhase::Failed);
    }

    #[test]
    fn submit_without_a_file_fails_locally() {
        let mut state = state();
        let ctx = egui::Context::default();

        state.submit(&ctx);

        assert_eq!(state.error_message.as_deref(), Some(NO_FILE_MESSAGE));
        assert_eq!(state.phase, UploadPhase::Failed);
    }

    #[test]
    fn submit_is_rejected_while_in_flight() {
        let mut state = state();
        let ctx = egui::Context::default();
        state.selected_file = Some(sample_file());
        state.phase = UploadPhase::InFlight;

        state.submit(&ctx);

        // Still the first request's state: no error, still loading.
        assert!(state.error_message.is_none());
        assert_eq!(state.phase, UploadPhase::InFlight);
    }

    #[test]
    fn invalid_selection_clears_the_accepted_file() {
        let mut state = state();
        state.selected_file = Some(sample_file());

        let dir = std::env::temp_dir();
        let path = dir.join("codequal_state_test.css");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"body {}"))
            .unwrap();

        state.select_path(&path);
        std::fs::remove_file(&path).ok();

        assert!(state.selected_file.is_none());
        assert_eq!(state.error_message.as_deref(), Some(INVALID_TYPE_MESSAGE));
    }

    #[test]
    fn valid_selection_replaces_the_previous_file() {
        let mut state = state();
        state.selected_file = Some(sample_file());

        let dir = std::env::temp_dir();
        let path = dir.join("codequal_state_test.js");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"console.log(1);"))
            .unwrap();

        state.select_path(&path);
        std::fs::remove_file(&path).ok();

        let file = state.selected_file.as_ref().unwrap();
        assert_eq!(file.name, "codequal_state_test.js");
        assert_eq!(file.extension, "js");
        assert_eq!(file.contents, b"console.log(1);");
    }
}
