// src/upload/mod.rs
use std::fs;
use std::path::Path;
use std::sync::mpsc::Sender;
use eframe::egui;

use crate::analysis::AnalysisResult;
use crate::upload::client::{AnalysisClient, UploadError};

pub mod client;

/// Extensions the client accepts before contacting the service.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["js", "jsx", "py"];

pub const INVALID_TYPE_MESSAGE: &str =
    "Invalid file type. Please select a .js, .jsx, or .py file.";
pub const NO_FILE_MESSAGE: &str = "Please select a file to analyze.";

// A user-chosen file, held until the upload completes or a new selection
// replaces it.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub extension: String,
    pub contents: Vec<u8>,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = validate_file_name(&name)?;

        let contents = fs::read(path).map_err(|source| UploadError::Read {
            name: name.clone(),
            source,
        })?;

        Ok(Self { name, extension, contents })
    }
}

/// Extension of a file name: the substring after the final `.`, lower-cased.
/// A name with no `.` has no extension.
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Check a file name against the accepted extension set, returning the
/// normalized extension.
pub fn validate_file_name(name: &str) -> Result<String, UploadError> {
    match extension_of(name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        _ => Err(UploadError::InvalidFileType { name: name.to_string() }),
    }
}

// Lifecycle of one upload attempt, consumed by the AppState reducer.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    Started,
    Succeeded(AnalysisResult),
    Failed(String),
}

/// Run the analysis request on a worker thread. Sends exactly one
/// Succeeded/Failed event back over the channel and wakes the UI.
pub fn spawn_upload(
    client: AnalysisClient,
    file: SelectedFile,
    events: Sender<UploadEvent>,
    ctx: egui::Context,
) {
    std::thread::spawn(move || {
        let event = match client.analyze(&file) {
            Ok(result) => UploadEvent::Succeeded(result),
            Err(err) => {
                // Diagnostics only; the user sees the mapped message.
                tracing::error!("error analyzing code: {err:?}");
                UploadEvent::Failed(err.user_message())
            }
        };

        if events.send(event).is_err() {
            tracing::warn!("upload finished after the receiver was dropped");
        }
        ctx.request_repaint();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_taken_after_the_final_dot() {
        assert_eq!(extension_of("main.py"), Some("py".to_string()));
        assert_eq!(extension_of("archive.tar.js"), Some("js".to_string()));
        assert_eq!(extension_of("trailing."), Some(String::new()));
        assert_eq!(extension_of("noextension"), None);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(validate_file_name("App.JSX").unwrap(), "jsx");
        assert_eq!(validate_file_name("script.Py").unwrap(), "py");
    }

    #[test]
    fn names_without_a_dot_are_rejected() {
        assert!(matches!(
            validate_file_name("Makefile"),
            Err(UploadError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        for name in ["style.css", "notes.txt", "lib.rs", "trailing."] {
            assert!(matches!(
                validate_file_name(name),
                Err(UploadError::InvalidFileType { .. })
            ));
        }
    }

    #[test]
    fn invalid_type_maps_to_the_fixed_message() {
        let err = validate_file_name("style.css").unwrap_err();
        assert_eq!(err.user_message(), INVALID_TYPE_MESSAGE);
    }
}
