use crate::catalog::ThemeKey;
use crate::fader::FaderKey;
use crate::state::AppTab;
use crate::state::ExplorationMode;
use crate::state::LogEntry;
use crate::state::PairId;

#[derive(Debug, Clone)]
pub enum AppAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    NextTab,
    PrevTab,
    SelectTab(AppTab),
    CloseOverlay,
    ShowHelp,

    // Soundboard picker.
    OpenPicker,
    PickerQueryInput(char),
    PickerQueryBackspace,
    PickerMoveUp,
    PickerMoveDown,
    PickerSubmit,
    ToggleSoundboardTheme(ThemeKey),

    // Faders.
    FocusChannel(usize),
    FocusNextChannel,
    FocusPrevChannel,
    SetLevel {
        key: ThemeKey,
        value: f64,
    },
    AdjustLevel {
        key: ThemeKey,
        input: FaderKey,
    },
    BeginFaderDrag {
        key: ThemeKey,
        pointer_y: f64,
        track_top: f64,
    },
    DragFader {
        pointer_y: f64,
    },
    EndFaderDrag,
    ResetLevels,
    /// Seed is chosen by the caller so reduction stays deterministic.
    RandomizeLevels {
        seed: u64,
    },
    OpenInvest,

    // Wheel.
    AssignSlot {
        slot: usize,
        key: ThemeKey,
    },
    ClearSlot(usize),
    ClearWheel,
    FocusSlot(usize),
    FocusNextSlot,
    FocusPrevSlot,
    ToggleDomainColours,
    SetExplorationMode(ExplorationMode),
    CycleExplorationMode,
    TogglePick(ThemeKey),
    ResetPicks,
    /// Ignored unless `pair` is the pair currently being reflected on.
    SetNoteAnswer {
        pair: PairId,
        question: usize,
        text: String,
        ts_ms: i64,
    },
    OpenThemeDetail(ThemeKey),
    CopyBlend,

    // Coaching questions.
    OpenExplore {
        key: ThemeKey,
        seed: u64,
    },
    RefreshExplore {
        seed: u64,
    },
    /// Index into the prompts currently shown.
    ToggleFavourite(usize),

    RequestExport(ExportKind),
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    /// Raw contents of an import file read off the UI thread.
    ApplyImport {
        source: String,
        contents: String,
    },
    ImportFailed {
        source: String,
        message: String,
    },
    ExportFinished {
        kind: ExportKind,
        target: String,
    },
    ExportFailed {
        kind: ExportKind,
        message: String,
    },
    AppendLog(LogEntry),
    ClearLogs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    SoundboardJson,
    WheelSnapshot,
    NotesReport,
}

impl ExportKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::SoundboardJson => "soundboard JSON",
            Self::WheelSnapshot => "wheel snapshot",
            Self::NotesReport => "notes report",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::SoundboardJson => "strengths-soundboard.json",
            Self::WheelSnapshot => "dominant-themes-wheel.svg",
            Self::NotesReport => "dominant-themes-notes.md",
        }
    }
}

/// Which slice of state a `Persist` effect should write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PersistScope {
    Mode,
    Soundboard,
    Wheel,
    Favourites,
}
