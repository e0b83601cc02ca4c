use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::DateTime;
use chrono::Utc;
use csb_core::document::SoundboardDocument;
use csb_core::report::build_report;
use csb_core::AppState;
use csb_core::ExportKind;
use csb_core::RuntimeAction;

use crate::contracts::ExportRequest;
use crate::contracts::ExportResult;
use crate::contracts::ExportStatus;
use crate::report::render_markdown;
use crate::svg::render_wheel_svg;
use crate::svg::SnapshotOptions;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("the wheel needs all {capacity} themes placed ({filled} so far)")]
    WheelIncomplete { filled: usize, capacity: usize },
    #[error("could not serialise soundboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rendered export, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    SoundboardJson(String),
    WheelSnapshot { svg: String },
    NotesReport { markdown: String },
}

impl ExportPayload {
    pub fn kind(&self) -> ExportKind {
        match self {
            Self::SoundboardJson(_) => ExportKind::SoundboardJson,
            Self::WheelSnapshot { .. } => ExportKind::WheelSnapshot,
            Self::NotesReport { .. } => ExportKind::NotesReport,
        }
    }

    pub fn contents(&self) -> &str {
        match self {
            Self::SoundboardJson(json) => json,
            Self::WheelSnapshot { svg } => svg,
            Self::NotesReport { markdown } => markdown,
        }
    }
}

/// Render `kind` from the current state. Wheel exports need a full wheel.
pub fn build_payload(
    state: &AppState,
    kind: ExportKind,
    exported_at: DateTime<Utc>,
) -> Result<ExportPayload, ExportError> {
    match kind {
        ExportKind::SoundboardJson => {
            let json = SoundboardDocument::from_state(&state.soundboard).to_json_pretty()?;
            Ok(ExportPayload::SoundboardJson(json))
        }
        ExportKind::WheelSnapshot => {
            require_full_wheel(state)?;
            let svg = render_wheel_svg(
                &state.wheel_geometry,
                state.wheel.selection.slots(),
                SnapshotOptions {
                    domain_colours: state.wheel.show_domain_colours,
                    ..SnapshotOptions::default()
                },
            );
            Ok(ExportPayload::WheelSnapshot { svg })
        }
        ExportKind::NotesReport => {
            require_full_wheel(state)?;
            let report = build_report(
                &state.wheel,
                exported_at,
                Some(ExportKind::WheelSnapshot.default_file_name()),
            );
            Ok(ExportPayload::NotesReport {
                markdown: render_markdown(&report),
            })
        }
    }
}

fn require_full_wheel(state: &AppState) -> Result<(), ExportError> {
    if state.wheel_full() {
        return Ok(());
    }
    Err(ExportError::WheelIncomplete {
        filled: state.wheel.selection.count(),
        capacity: state.wheel.selection.capacity(),
    })
}

pub trait ExportSink {
    fn write(&self, request: &ExportRequest, payload: &ExportPayload) -> ExportResult;
}

/// Writes payloads to their target path, replacing any existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileExportSink;

/// Reports what would be written without touching the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExportSink;

impl ExportSink for FileExportSink {
    fn write(&self, request: &ExportRequest, payload: &ExportPayload) -> ExportResult {
        let contents = payload.contents();
        match write_file(&request.target, contents) {
            Ok(()) => {
                tracing::info!(
                    kind = request.kind.label(),
                    target = %request.target.display(),
                    bytes = contents.len(),
                    "export written"
                );
                build_result(
                    request,
                    ExportStatus::Written,
                    contents.len(),
                    vec![format!(
                        "wrote {} bytes to {}",
                        contents.len(),
                        request.target.display()
                    )],
                )
            }
            Err(err) => {
                tracing::warn!(
                    kind = request.kind.label(),
                    target = %request.target.display(),
                    error = %err,
                    "export failed"
                );
                build_result(
                    request,
                    ExportStatus::Failed,
                    0,
                    vec![format!("{}: {err}", request.target.display())],
                )
            }
        }
    }
}

impl ExportSink for DryRunExportSink {
    fn write(&self, request: &ExportRequest, payload: &ExportPayload) -> ExportResult {
        let bytes = payload.contents().len();
        build_result(
            request,
            ExportStatus::Skipped,
            bytes,
            vec![format!(
                "dry run: {bytes} bytes for {}",
                request.target.display()
            )],
        )
    }
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()
}

fn build_result(
    request: &ExportRequest,
    status: ExportStatus,
    bytes: usize,
    logs: Vec<String>,
) -> ExportResult {
    ExportResult {
        export_id: request.export_id,
        kind: request.kind,
        target: request.target.clone(),
        status,
        bytes,
        logs,
    }
}

/// Runtime action reporting a finished export back to the reducer.
pub fn completion_action(result: &ExportResult) -> RuntimeAction {
    match result.status {
        ExportStatus::Written | ExportStatus::Skipped => RuntimeAction::ExportFinished {
            kind: result.kind,
            target: result.target.display().to_string(),
        },
        ExportStatus::Failed => RuntimeAction::ExportFailed {
            kind: result.kind,
            message: result
                .logs
                .last()
                .cloned()
                .unwrap_or_else(|| "unknown error".to_string()),
        },
    }
}
