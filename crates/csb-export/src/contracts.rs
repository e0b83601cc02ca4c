use std::path::PathBuf;

use csb_core::ExportKind;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    Written,
    /// Rendered but not written, as by a dry run.
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub export_id: u64,
    pub kind: ExportKind,
    pub target: PathBuf,
}

impl ExportRequest {
    /// Request writing `kind` under `dir` with its default file name.
    pub fn in_dir(export_id: u64, kind: ExportKind, dir: impl Into<PathBuf>) -> Self {
        Self {
            export_id,
            kind,
            target: dir.into().join(kind.default_file_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
    pub export_id: u64,
    pub kind: ExportKind,
    pub target: PathBuf,
    pub status: ExportStatus,
    pub bytes: usize,
    pub logs: Vec<String>,
}

impl ExportResult {
    pub fn is_written(&self) -> bool {
        self.status == ExportStatus::Written
    }
}
