use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Terminal;

use csb_core::blend;
use csb_core::catalog;
use csb_core::fader;
use csb_core::guides;
use csb_core::persistence::StateStore;
use csb_core::state::NO_DESCRIPTION;
use csb_core::state::WHEEL_PLACEHOLDER;
use csb_core::wheel;
use csb_core::wheel::Point;
use csb_core::AppAction;
use csb_core::AppState;
use csb_core::AppTab;
use csb_core::CsbEffect;
use csb_core::ExplorationMode;
use csb_core::ExplorationPhase;
use csb_core::ExportKind;
use csb_core::fader::FaderKey;
use csb_core::LogLevel;
use csb_core::LogSource;
use csb_core::Overlay;
use csb_core::PairId;
use csb_core::RuntimeAction;
use csb_core::ThemeKey;
use csb_core::UserAction;
use csb_export::ExportRequest;
use csb_export::ExportResult;
use csb_export::ExportSink;
use csb_export::FileExportSink;

use crate::session::Session;
use crate::settings::Settings;

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

pub fn run<S: StateStore>(mut session: Session<S>, settings: &Settings) -> Result<()> {
    let mut local = UiLocal::new(export_dir(settings));
    tracing::info!(export_dir = %local.export_dir.display(), "starting terminal ui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, &mut session, &mut local)?;
    tracing::info!("terminal ui closed");
    Ok(())
}

fn export_dir(settings: &Settings) -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| settings.data_dir.join("exports"))
}

enum UiEvent {
    ImportRead {
        source: String,
        contents: io::Result<String>,
    },
    ExportDone(ExportResult),
}

/// Free-text answer being typed for the pair it was opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NoteEditor {
    pair: PairId,
    question: usize,
    buffer: String,
}

/// Terminal-only state that never reaches the reducer.
struct UiLocal {
    export_dir: PathBuf,
    editor: Option<NoteEditor>,
    next_export_id: u64,
    /// Set by a key press, picked up by the loop that owns the channel.
    pending_import: bool,
}

impl UiLocal {
    fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            editor: None,
            next_export_id: 1,
            pending_import: false,
        }
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run_app<B: Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> io::Result<()> {
    let (tx, rx) = mpsc::channel::<UiEvent>();

    loop {
        while let Ok(event) = rx.try_recv() {
            let action = match event {
                UiEvent::ImportRead { source, contents } => match contents {
                    Ok(contents) => RuntimeAction::ApplyImport { source, contents },
                    Err(err) => RuntimeAction::ImportFailed {
                        source,
                        message: err.to_string(),
                    },
                },
                UiEvent::ExportDone(result) => csb_export::completion_action(&result),
            };
            session.dispatch(AppAction::Runtime(action));
        }

        terminal.draw(|f| ui(f, &session.state, local))?;

        if event::poll(Duration::from_millis(50))? {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            let effects = match event::read()? {
                Event::Key(key) => match handle_key_event(key, session, local) {
                    KeyHandlerResult::Continue(effects) => effects,
                    KeyHandlerResult::Exit => return Ok(()),
                },
                Event::Mouse(mouse) => handle_mouse_event(mouse, session, local, area),
                _ => Vec::new(),
            };
            run_effects(effects, session, local, &tx);
            if std::mem::take(&mut local.pending_import) {
                start_import(local, &tx);
            }
        }
    }
}

fn run_effects<S: StateStore>(
    effects: Vec<CsbEffect>,
    session: &mut Session<S>,
    local: &mut UiLocal,
    tx: &mpsc::Sender<UiEvent>,
) {
    for effect in effects {
        match effect {
            CsbEffect::RequestFrame | CsbEffect::Persist(_) => {}
            CsbEffect::Export(kind) => start_export(kind, session, local, tx),
            CsbEffect::CopyToClipboard(text) => {
                let copied = arboard::Clipboard::new().and_then(|mut c| c.set_text(text));
                if let Err(err) = copied {
                    tracing::warn!(error = %err, "clipboard unavailable");
                    session.state.log(
                        LogLevel::Warn,
                        LogSource::App,
                        format!("Clipboard unavailable: {err}"),
                    );
                }
            }
        }
    }
}

fn start_export<S: StateStore>(
    kind: ExportKind,
    session: &mut Session<S>,
    local: &mut UiLocal,
    tx: &mpsc::Sender<UiEvent>,
) {
    let payload = match csb_export::build_payload(&session.state, kind, Utc::now()) {
        Ok(payload) => payload,
        Err(err) => {
            session.dispatch(AppAction::Runtime(RuntimeAction::ExportFailed {
                kind,
                message: err.to_string(),
            }));
            return;
        }
    };
    let request = ExportRequest::in_dir(local.next_export_id, kind, &local.export_dir);
    local.next_export_id += 1;
    let tx = tx.clone();
    std::thread::spawn(move || {
        let result = FileExportSink.write(&request, &payload);
        let _ = tx.send(UiEvent::ExportDone(result));
    });
}

fn start_import(local: &UiLocal, tx: &mpsc::Sender<UiEvent>) {
    let path = local
        .export_dir
        .join(ExportKind::SoundboardJson.default_file_name());
    let tx = tx.clone();
    std::thread::spawn(move || {
        let contents = std::fs::read_to_string(&path);
        let _ = tx.send(UiEvent::ImportRead {
            source: path.display().to_string(),
            contents,
        });
    });
}

enum KeyHandlerResult {
    Continue(Vec<CsbEffect>),
    Exit,
}

fn handle_key_event<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }
    if let Some(editor) = &local.editor {
        if session.state.wheel.active_pair().as_ref() == Some(&editor.pair) {
            return KeyHandlerResult::Continue(handle_editor_keys(key, session, local));
        }
        local.editor = None;
    }

    let effects = match &session.state.interaction.overlay {
        Overlay::Picker { .. } => handle_picker_keys(key, session),
        Overlay::Help | Overlay::Invest => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                dispatch(session, UserAction::CloseOverlay)
            }
            _ => Vec::new(),
        },
        Overlay::ThemeDetail(theme) => {
            let theme = *theme;
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    dispatch(session, UserAction::CloseOverlay)
                }
                KeyCode::Char('o') => dispatch(
                    session,
                    UserAction::OpenExplore {
                        key: theme,
                        seed: seed(),
                    },
                ),
                _ => Vec::new(),
            }
        }
        Overlay::Explore { .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => dispatch(session, UserAction::CloseOverlay),
            KeyCode::Char('r') => dispatch(session, UserAction::RefreshExplore { seed: seed() }),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                dispatch(session, UserAction::ToggleFavourite(idx))
            }
            _ => Vec::new(),
        },
        Overlay::None => return handle_global_keys(key, session, local),
    };
    KeyHandlerResult::Continue(effects)
}

fn dispatch<S: StateStore>(session: &mut Session<S>, action: UserAction) -> Vec<CsbEffect> {
    session.dispatch(AppAction::User(action))
}

fn handle_picker_keys<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
) -> Vec<CsbEffect> {
    let action = match key.code {
        KeyCode::Esc => UserAction::CloseOverlay,
        KeyCode::Up => UserAction::PickerMoveUp,
        KeyCode::Down => UserAction::PickerMoveDown,
        KeyCode::Enter => UserAction::PickerSubmit,
        KeyCode::Backspace => UserAction::PickerQueryBackspace,
        KeyCode::Char(c) => UserAction::PickerQueryInput(c),
        _ => return Vec::new(),
    };
    dispatch(session, action)
}

fn handle_editor_keys<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> Vec<CsbEffect> {
    let Some(editor) = local.editor.as_mut() else {
        return Vec::new();
    };
    // Every edit is saved straight away, so closing never loses text.
    let edited = match key.code {
        KeyCode::Backspace => editor.buffer.pop().is_some(),
        KeyCode::Char(c) => {
            editor.buffer.push(c);
            true
        }
        _ => false,
    };
    if edited {
        let action = UserAction::SetNoteAnswer {
            pair: editor.pair.clone(),
            question: editor.question,
            text: editor.buffer.clone(),
            ts_ms: Utc::now().timestamp_millis(),
        };
        return dispatch(session, action);
    }

    let question = editor.question;
    let next = match key.code {
        KeyCode::Esc => None,
        KeyCode::Up => question.checked_sub(1),
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            Some(question + 1).filter(|q| *q < blend::REFLECTION_QUESTIONS.len())
        }
        _ => return Vec::new(),
    };
    local.editor = next.and_then(|question| open_editor(&session.state, question));
    vec![CsbEffect::RequestFrame]
}

/// Editor preloaded with the stored answer, when a pair is being reflected on.
fn open_editor(state: &AppState, question: usize) -> Option<NoteEditor> {
    if state.wheel.pairwise.mode() != ExplorationMode::Reflect {
        return None;
    }
    let pair = state.wheel.active_pair()?;
    Some(NoteEditor {
        buffer: state.wheel.notes.answer(&pair, question).to_string(),
        pair,
        question,
    })
}

fn handle_global_keys<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> KeyHandlerResult {
    let tab = session.state.routing.tab;
    let action = match key.code {
        KeyCode::Char('q') => return KeyHandlerResult::Exit,
        KeyCode::Char('?') => Some(UserAction::ShowHelp),
        KeyCode::Tab => Some(UserAction::NextTab),
        KeyCode::BackTab => Some(UserAction::PrevTab),
        KeyCode::Char(c @ '1'..='4') => {
            AppTab::ALL.get(c as usize - '1' as usize).copied().map(UserAction::SelectTab)
        }
        _ => None,
    };
    if let Some(action) = action {
        return KeyHandlerResult::Continue(dispatch(session, action));
    }

    let effects = match tab {
        AppTab::Soundboard => handle_soundboard_keys(key, session, local),
        AppTab::Dominant => handle_wheel_keys(key, session, local),
        AppTab::Communication | AppTab::BalconyBasement => match key.code {
            KeyCode::Left => dispatch(session, UserAction::FocusPrevChannel),
            KeyCode::Right => dispatch(session, UserAction::FocusNextChannel),
            KeyCode::Char('o') => explore_focused_channel(session),
            _ => Vec::new(),
        },
    };
    KeyHandlerResult::Continue(effects)
}

fn explore_focused_channel<S: StateStore>(session: &mut Session<S>) -> Vec<CsbEffect> {
    match session.state.focused_channel_key() {
        Some(key) => dispatch(session, UserAction::OpenExplore { key, seed: seed() }),
        None => Vec::new(),
    }
}

fn handle_soundboard_keys<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> Vec<CsbEffect> {
    let focused = session.state.focused_channel_key();
    let fader_key = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(FaderKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(FaderKey::Down),
        KeyCode::Home => Some(FaderKey::Home),
        KeyCode::End => Some(FaderKey::End),
        _ => None,
    };
    if let (Some(input), Some(theme)) = (fader_key, focused) {
        return dispatch(session, UserAction::AdjustLevel { key: theme, input });
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => dispatch(session, UserAction::FocusPrevChannel),
        KeyCode::Right | KeyCode::Char('l') => dispatch(session, UserAction::FocusNextChannel),
        KeyCode::Char('a') | KeyCode::Enter => dispatch(session, UserAction::OpenPicker),
        KeyCode::Char('x') | KeyCode::Delete => match focused {
            Some(theme) => dispatch(session, UserAction::ToggleSoundboardTheme(theme)),
            None => Vec::new(),
        },
        KeyCode::Char('r') => dispatch(session, UserAction::ResetLevels),
        KeyCode::Char('R') => dispatch(session, UserAction::RandomizeLevels { seed: seed() }),
        KeyCode::Char('v') => dispatch(session, UserAction::OpenInvest),
        KeyCode::Char('o') => explore_focused_channel(session),
        KeyCode::Char('e') => dispatch(
            session,
            UserAction::RequestExport(ExportKind::SoundboardJson),
        ),
        KeyCode::Char('i') => {
            local.pending_import = true;
            vec![CsbEffect::RequestFrame]
        }
        _ => Vec::new(),
    }
}

fn handle_wheel_keys<S: StateStore>(
    key: event::KeyEvent,
    session: &mut Session<S>,
    local: &mut UiLocal,
) -> Vec<CsbEffect> {
    let focused = session.state.focused_slot_key();
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => dispatch(session, UserAction::FocusPrevSlot),
        KeyCode::Right | KeyCode::Char('l') => dispatch(session, UserAction::FocusNextSlot),
        KeyCode::Char('a') => dispatch(session, UserAction::OpenPicker),
        KeyCode::Enter => match focused {
            Some(theme) => dispatch(session, UserAction::OpenThemeDetail(theme)),
            None => dispatch(session, UserAction::OpenPicker),
        },
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            let slot = session.state.interaction.focus_slot;
            dispatch(session, UserAction::ClearSlot(slot))
        }
        KeyCode::Char('C') => dispatch(session, UserAction::ClearWheel),
        KeyCode::Char('d') => dispatch(session, UserAction::ToggleDomainColours),
        KeyCode::Char('m') => dispatch(session, UserAction::CycleExplorationMode),
        KeyCode::Char(' ') => match focused {
            Some(theme) => dispatch(session, UserAction::TogglePick(theme)),
            None => Vec::new(),
        },
        KeyCode::Char('p') => dispatch(session, UserAction::ResetPicks),
        KeyCode::Char('y') => dispatch(session, UserAction::CopyBlend),
        KeyCode::Char('o') => match focused {
            Some(theme) => dispatch(
                session,
                UserAction::OpenExplore {
                    key: theme,
                    seed: seed(),
                },
            ),
            None => Vec::new(),
        },
        KeyCode::Char('w') => {
            local.editor = open_editor(&session.state, 0);
            vec![CsbEffect::RequestFrame]
        }
        KeyCode::Char('s') => dispatch(
            session,
            UserAction::RequestExport(ExportKind::WheelSnapshot),
        ),
        KeyCode::Char('n') => dispatch(session, UserAction::RequestExport(ExportKind::NotesReport)),
        _ => Vec::new(),
    }
}

fn handle_mouse_event<S: StateStore>(
    mouse: event::MouseEvent,
    session: &mut Session<S>,
    local: &UiLocal,
    area: Rect,
) -> Vec<CsbEffect> {
    if local.editor.is_some() || session.state.interaction.overlay != Overlay::None {
        return Vec::new();
    }
    let screen = screen_layout(area);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(screen.tabs, mouse.column, mouse.row) {
                return match tab_at(screen.tabs, mouse.column) {
                    Some(tab) => dispatch(session, UserAction::SelectTab(tab)),
                    None => Vec::new(),
                };
            }
            match session.state.routing.tab {
                AppTab::Soundboard => press_fader(session, screen.body, mouse.column, mouse.row),
                AppTab::Dominant => click_wheel(session, screen.body, mouse.column, mouse.row),
                _ => Vec::new(),
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if session.state.soundboard.drag.is_none() {
                return Vec::new();
            }
            let faders = soundboard_layout(session.state.soundboard.selection.count(), screen.body);
            let Some(track) = faders.columns.first().map(|column| fader_track(*column)) else {
                return Vec::new();
            };
            let pointer_y = fader_pointer(&session.state, track, mouse.row);
            dispatch(session, UserAction::DragFader { pointer_y })
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if session.state.soundboard.drag.is_none() {
                return Vec::new();
            }
            dispatch(session, UserAction::EndFaderDrag)
        }
        _ => Vec::new(),
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn tab_at(tabs_area: Rect, column: u16) -> Option<AppTab> {
    // Each title is padded by one space either side and followed by a divider.
    let mut current_x = tabs_area.x + 1;
    for tab in AppTab::ALL {
        let width = tab_title(tab).chars().count() as u16 + 2;
        if column >= current_x && column < current_x + width {
            return Some(tab);
        }
        current_x += width + 1;
    }
    None
}

fn tab_title(tab: AppTab) -> String {
    let idx = AppTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    format!("{} {}", idx + 1, tab.label())
}

fn press_fader<S: StateStore>(
    session: &mut Session<S>,
    body: Rect,
    column: u16,
    row: u16,
) -> Vec<CsbEffect> {
    let faders = soundboard_layout(session.state.soundboard.selection.count(), body);
    let Some(idx) = faders
        .columns
        .iter()
        .position(|area| contains(*area, column, row))
    else {
        return Vec::new();
    };
    let Some(theme) = session.state.soundboard.selection.slot(idx) else {
        return Vec::new();
    };
    let mut effects = dispatch(session, UserAction::FocusChannel(idx));
    let track = fader_track(faders.columns[idx]);
    if !contains(track, column, row) {
        return effects;
    }
    let pointer_y = fader_pointer(&session.state, track, row);
    effects.extend(dispatch(
        session,
        UserAction::BeginFaderDrag {
            key: theme,
            pointer_y,
            track_top: 0.0,
        },
    ));
    effects
}

/// Map a terminal row on the track to a pointer in fader geometry units,
/// with the top row at 100 and the bottom row at 0.
fn fader_pointer(state: &AppState, track: Rect, row: u16) -> f64 {
    let geometry = &state.fader_geometry;
    let rows = f64::from(track.height.max(2) - 1);
    let offset = f64::from(row.saturating_sub(track.y)).min(rows);
    offset / rows * geometry.range() + geometry.handle_height / 2.0
}

fn click_wheel<S: StateStore>(
    session: &mut Session<S>,
    body: Rect,
    column: u16,
    row: u16,
) -> Vec<CsbEffect> {
    let (wheel_area, _) = dominant_layout(body);
    let canvas = wheel_canvas(wheel_area);
    let geometry = session.state.wheel_geometry;
    let Some(point) = cell_to_wheel_point(canvas, geometry.size, column, row) else {
        return Vec::new();
    };
    let Some(slot) = wheel::ring_slot_at(&geometry, point) else {
        return Vec::new();
    };
    let mut effects = dispatch(session, UserAction::FocusSlot(slot));
    let state = &session.state;
    let theme = state.wheel.selection.slot(slot);
    let action = match theme {
        None => UserAction::OpenPicker,
        Some(theme) if state.wheel.pairwise.mode() != ExplorationMode::Off && state.wheel_full() => {
            UserAction::TogglePick(theme)
        }
        Some(theme) => UserAction::OpenThemeDetail(theme),
    };
    effects.extend(dispatch(session, action));
    effects
}

/// Centre of a terminal cell in wheel coordinates (SVG orientation, y down).
fn cell_to_wheel_point(canvas: Rect, size: f64, column: u16, row: u16) -> Option<Point> {
    if !contains(canvas, column, row) {
        return None;
    }
    let x = (f64::from(column - canvas.x) + 0.5) / f64::from(canvas.width) * size;
    let y = (f64::from(row - canvas.y) + 0.5) / f64::from(canvas.height) * size;
    Some(Point::new(x, y))
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    panel_bg: Color,
    neutral_fill: Color,
    empty_fill: Color,
    pick: Color,
}

const PALETTE: UiPalette = UiPalette {
    accent: Color::Cyan,
    warning: Color::Yellow,
    danger: Color::Red,
    muted: Color::DarkGray,
    border: Color::Gray,
    panel_bg: Color::Black,
    neutral_fill: Color::Gray,
    empty_fill: Color::Rgb(55, 60, 66),
    pick: Color::LightYellow,
};

fn domain_color(theme: ThemeKey) -> Color {
    let (r, g, b) = theme.domain().rgb();
    Color::Rgb(r, g, b)
}

struct ScreenLayout {
    header: Rect,
    tabs: Rect,
    body: Rect,
    activity: Rect,
    footer: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        activity: chunks[3],
        footer: chunks[4],
    }
}

struct SoundboardLayout {
    columns: Vec<Rect>,
    detail: Rect,
    invest: Rect,
}

fn soundboard_layout(channels: usize, body: Rect) -> SoundboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(body);
    let columns = if channels == 0 {
        Vec::new()
    } else {
        let ratios: Vec<Constraint> = (0..channels)
            .map(|_| Constraint::Ratio(1, channels as u32))
            .collect();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(ratios)
            .split(rows[0])
            .to_vec()
    };
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    SoundboardLayout {
        columns,
        detail: bottom[0],
        invest: bottom[1],
    }
}

/// Rows of a channel column that make up the fader track.
fn fader_track(column: Rect) -> Rect {
    let inner = Rect {
        x: column.x + 1,
        y: column.y + 1,
        width: column.width.saturating_sub(2),
        height: column.height.saturating_sub(2),
    };
    Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    }
}

fn dominant_layout(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);
    (chunks[0], chunks[1])
}

/// Area inside the wheel panel, widened two cells per row so the ring looks round.
fn wheel_canvas(panel: Rect) -> Rect {
    let inner = Rect {
        x: panel.x + 1,
        y: panel.y + 1,
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    };
    let height = inner.height.min(inner.width / 2).max(1);
    let width = (height * 2).min(inner.width).max(1);
    Rect {
        x: inner.x + inner.width.saturating_sub(width) / 2,
        y: inner.y + inner.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn ui(f: &mut ratatui::Frame, state: &AppState, local: &UiLocal) {
    let palette = PALETTE;
    let screen = screen_layout(f.area());

    let header = format!(
        "CliftonStrengths Soundboard | soundboard {}/{} | wheel {}/{} | explore: {}",
        state.soundboard.selection.count(),
        state.soundboard.selection.capacity(),
        state.wheel.selection.count(),
        state.wheel.selection.capacity(),
        state.wheel.pairwise.mode().label(),
    );
    f.render_widget(
        Paragraph::new(header).style(Style::default().fg(palette.accent)),
        screen.header,
    );

    let titles: Vec<Line> = AppTab::ALL.iter().map(|tab| Line::from(tab_title(*tab))).collect();
    let selected = AppTab::ALL
        .iter()
        .position(|tab| *tab == state.routing.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, screen.tabs);

    match state.routing.tab {
        AppTab::Soundboard => render_soundboard(f, screen.body, state, palette),
        AppTab::Dominant => render_dominant(f, screen.body, state, local, palette),
        AppTab::Communication => render_communication(f, screen.body, state, palette),
        AppTab::BalconyBasement => render_balcony_basement(f, screen.body, state, palette),
    }

    render_activity(f, screen.activity, state, palette);

    let footer = match (state.routing.tab, local.editor.is_some()) {
        (_, true) => "Typing answer: Enter save+next | Up previous | Esc stop",
        (AppTab::Soundboard, _) => {
            "a add/remove | ←/→ channel | ↑/↓ Home/End level | r reset | R random | v invest | o explore | e export | i import | ? help | q quit"
        }
        (AppTab::Dominant, _) => {
            "a pick | ←/→ slot | Enter details | x clear | d colours | m mode | Space pick pair | w write | y copy | s svg | n notes | q quit"
        }
        _ => "←/→ theme | o explore questions | Tab next view | ? help | q quit",
    };
    f.render_widget(
        Paragraph::new(footer).style(Style::default().fg(palette.muted)),
        screen.footer,
    );

    render_overlay(f, state, palette);
}

fn panel(title: impl Into<String>, palette: UiPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title.into())
}

fn render_soundboard(f: &mut ratatui::Frame, area: Rect, state: &AppState, palette: UiPalette) {
    let keys = state.soundboard.selection.keys();
    let layout = soundboard_layout(keys.len(), area);

    if keys.is_empty() {
        let empty = Paragraph::new("No themes on the soundboard. Press a to add some.")
            .alignment(Alignment::Center)
            .block(panel("Soundboard", palette));
        f.render_widget(empty, area);
        return;
    }

    for (idx, (theme, column)) in keys.iter().zip(&layout.columns).enumerate() {
        render_channel(
            f,
            *column,
            state,
            *theme,
            idx == state.interaction.focus_channel,
            palette,
        );
    }

    let mut detail = Vec::new();
    if let Some(theme) = state.focused_channel_key() {
        let level = state.soundboard.level(theme);
        detail.push(Line::from(Span::styled(
            theme.trademarked_name(),
            Style::default()
                .fg(domain_color(theme))
                .add_modifier(Modifier::BOLD),
        )));
        detail.push(Line::from(theme.theme().blurb));
        if fader::is_overused(level) {
            detail.push(Line::from(Span::styled(
                format!("Blind spot: {}", fader::overused_warning(theme)),
                Style::default().fg(palette.danger),
            )));
        }
    }
    f.render_widget(
        Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(panel("Focused theme", palette)),
        layout.detail,
    );

    let focus: Vec<Line> = guides::combined_investment_focus(&keys)
        .into_iter()
        .map(Line::from)
        .collect();
    f.render_widget(
        Paragraph::new(focus)
            .wrap(Wrap { trim: true })
            .block(panel("Investment focus", palette)),
        layout.invest,
    );
}

fn render_channel(
    f: &mut ratatui::Frame,
    column: Rect,
    state: &AppState,
    theme: ThemeKey,
    focused: bool,
    palette: UiPalette,
) {
    let level = state.soundboard.level(theme);
    let overused = fader::is_overused(level);
    let border = if focused { palette.accent } else { palette.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(theme.name());
    f.render_widget(block, column);

    let track = fader_track(column);
    let rows = usize::from(track.height);
    let filled = ((level / 100.0) * rows as f64).round() as usize;
    let fill_color = if overused {
        palette.danger
    } else {
        domain_color(theme)
    };
    let bar = "█".repeat(usize::from(track.width.saturating_sub(2)).max(1));
    let mut lines: Vec<Line> = (0..rows)
        .map(|row| {
            if row >= rows.saturating_sub(filled) {
                Line::from(Span::styled(bar.clone(), Style::default().fg(fill_color)))
            } else {
                Line::from(Span::styled("│", Style::default().fg(palette.muted)))
            }
        })
        .collect();
    lines.push(Line::from(format!("{level:.0}")));
    lines.push(if overused {
        Line::from(Span::styled(
            "overused",
            Style::default().fg(palette.warning),
        ))
    } else {
        Line::from("")
    });

    let inner = Rect {
        height: track.height + 2,
        ..track
    };
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_dominant(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &AppState,
    local: &UiLocal,
    palette: UiPalette,
) {
    let (wheel_area, side) = dominant_layout(area);
    f.render_widget(panel("Dominant themes", palette), wheel_area);
    render_wheel(f, wheel_canvas(wheel_area), state, palette);

    let mut lines: Vec<Line> = Vec::new();
    if !state.wheel_full() {
        lines.push(Line::from(Span::styled(
            WHEEL_PLACEHOLDER,
            Style::default().fg(palette.warning),
        )));
        lines.push(Line::from(""));
    }

    match (state.wheel.pairwise.phase(), state.wheel.pairwise.pair()) {
        (ExplorationPhase::Ready, Some((a, b))) => match state.wheel.pairwise.mode() {
            ExplorationMode::Reflect => reflect_lines(&mut lines, state, local, a, b, palette),
            _ => blend_lines(&mut lines, a, b, palette),
        },
        (ExplorationPhase::Picking, _) => {
            lines.push(Line::from(format!(
                "{} mode: pick two themes with Space ({}/2)",
                state.wheel.pairwise.mode().label(),
                state.wheel.pairwise.picks().len()
            )));
            lines.push(Line::from(""));
            ranked_lines(&mut lines, state, palette);
        }
        _ => ranked_lines(&mut lines, state, palette),
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Explore", palette)),
        side,
    );
}

fn ranked_lines(lines: &mut Vec<Line<'static>>, state: &AppState, palette: UiPalette) {
    for (idx, slot) in state.wheel.selection.slots().iter().enumerate() {
        let marker = if idx == state.interaction.focus_slot {
            "▶"
        } else {
            " "
        };
        let line = match slot {
            Some(theme) => Line::from(vec![
                Span::raw(format!("{marker} #{:<2} ", idx + 1)),
                Span::styled(
                    theme.trademarked_name(),
                    Style::default().fg(domain_color(*theme)),
                ),
                Span::styled(
                    format!("  {}", theme.domain().label()),
                    Style::default().fg(palette.muted),
                ),
            ]),
            None => Line::from(Span::styled(
                format!("{marker} #{:<2} (empty)", idx + 1),
                Style::default().fg(palette.muted),
            )),
        };
        lines.push(line);
    }
}

fn blend_lines(lines: &mut Vec<Line<'static>>, a: ThemeKey, b: ThemeKey, palette: UiPalette) {
    let narrative = blend::blend(a, b);
    lines.push(Line::from(Span::styled(
        narrative.title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for text in [
        narrative.headline,
        narrative.drivers,
        narrative.effect,
        narrative.domains,
        narrative.complement.to_string(),
    ] {
        lines.push(Line::from(text));
    }
    lines.push(Line::from(""));
    for question in narrative.questions {
        lines.push(Line::from(format!("• {question}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y copies this blend",
        Style::default().fg(palette.muted),
    )));
}

fn reflect_lines(
    lines: &mut Vec<Line<'static>>,
    state: &AppState,
    local: &UiLocal,
    a: ThemeKey,
    b: ThemeKey,
    palette: UiPalette,
) {
    let view = blend::reflect(a, b);
    let pair = PairId::new(a, b);
    lines.push(Line::from(Span::styled(
        view.title,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    for (name, blurb) in [view.left, view.right] {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(blurb),
        ]));
    }
    lines.push(Line::from(""));
    for (idx, question) in view.questions.iter().enumerate() {
        lines.push(Line::from(format!("{}. {question}", idx + 1)));
        let answer = match &local.editor {
            Some(editor) if editor.question == idx => Line::from(Span::styled(
                format!("   > {}▏", editor.buffer),
                Style::default().fg(palette.accent),
            )),
            _ => {
                let stored = state.wheel.notes.answer(&pair, idx);
                if stored.trim().is_empty() {
                    Line::from(Span::styled(
                        "   (w to write)",
                        Style::default().fg(palette.muted),
                    ))
                } else {
                    Line::from(format!("   {stored}"))
                }
            }
        };
        lines.push(answer);
    }
}

fn render_wheel(f: &mut ratatui::Frame, canvas_area: Rect, state: &AppState, palette: UiPalette) {
    let geometry = state.wheel_geometry;
    let size = geometry.size;
    let center = geometry.center();
    let slots = state.wheel.selection.slots().to_vec();
    let picks = state.wheel.pairwise.picks().to_vec();
    let focus = state.interaction.focus_slot;
    let colours = state.wheel.show_domain_colours;
    let layouts = wheel::layout(&geometry, &slots);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            for slot in 0..geometry.slots {
                let (start, end) = geometry.slot_angles(slot);
                let theme = slots.get(slot).copied().flatten();
                let color = match theme {
                    Some(theme) if picks.contains(&theme) => palette.pick,
                    Some(theme) if colours => domain_color(theme),
                    Some(_) => palette.neutral_fill,
                    None => palette.empty_fill,
                };
                let coords = wedge_points(center, geometry.r_inner, geometry.r_outer, start, end, size);
                ctx.draw(&Points {
                    coords: &coords,
                    color,
                });
                if slot == focus {
                    let outline =
                        wedge_outline(center, geometry.r_inner, geometry.r_outer, start, end, size);
                    ctx.draw(&Points {
                        coords: &outline,
                        color: palette.accent,
                    });
                }
            }
            ctx.layer();
            for wedge in &layouts {
                let label = format!("{} {}", wedge.rank_label, short_name(wedge.key.name()));
                ctx.print(
                    wedge.label_anchor.x - label.chars().count() as f64 * size / 120.0,
                    size - wedge.label_anchor.y,
                    Span::styled(label, Style::default().fg(Color::White)),
                );
            }
            ctx.print(
                center.x - size / 20.0,
                size - center.y,
                Span::styled(
                    format!("Top {}", geometry.slots),
                    Style::default().fg(palette.muted),
                ),
            );
        });
    f.render_widget(canvas, canvas_area);
}

fn short_name(name: &str) -> String {
    const MAX: usize = 10;
    if name.chars().count() <= MAX {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(MAX - 1).collect();
        short.push('…');
        short
    }
}

/// Sample points filling a wedge, in canvas orientation (y up).
fn wedge_points(
    center: Point,
    r_inner: f64,
    r_outer: f64,
    start: f64,
    end: f64,
    size: f64,
) -> Vec<(f64, f64)> {
    let radial_steps = 14;
    let angular_steps = ((end - start).abs().ceil() as usize).max(2);
    let mut coords = Vec::with_capacity((radial_steps + 1) * (angular_steps - 1));
    for i in 0..=radial_steps {
        let radius = r_inner + (r_outer - r_inner) * i as f64 / radial_steps as f64;
        // Skip the exact edges so adjacent wedges show a seam.
        for j in 1..angular_steps {
            let angle = start + (end - start) * j as f64 / angular_steps as f64;
            let p = wheel::polar_to_cartesian(center, radius, angle);
            coords.push((p.x, size - p.y));
        }
    }
    coords
}

fn wedge_outline(
    center: Point,
    r_inner: f64,
    r_outer: f64,
    start: f64,
    end: f64,
    size: f64,
) -> Vec<(f64, f64)> {
    let mut coords = Vec::new();
    let steps = ((end - start).abs().ceil() as usize * 2).max(4);
    for radius in [r_inner, r_outer] {
        for j in 0..=steps {
            let angle = start + (end - start) * j as f64 / steps as f64;
            let p = wheel::polar_to_cartesian(center, radius, angle);
            coords.push((p.x, size - p.y));
        }
    }
    for angle in [start, end] {
        for i in 0..=12 {
            let radius = r_inner + (r_outer - r_inner) * f64::from(i) / 12.0;
            let p = wheel::polar_to_cartesian(center, radius, angle);
            coords.push((p.x, size - p.y));
        }
    }
    coords
}

fn render_communication(f: &mut ratatui::Frame, area: Rect, state: &AppState, palette: UiPalette) {
    let mut lines = Vec::new();
    for theme in state.soundboard.selection.keys() {
        theme_heading(&mut lines, state, theme);
        lines.push(Line::from(guides::communication_style_or_default(theme)));
        lines.push(Line::from(""));
    }
    prompt_lines(&mut lines, &guides::COMMUNICATION_PROMPTS, palette);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Strengths & Communication", palette)),
        area,
    );
}

fn render_balcony_basement(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &AppState,
    palette: UiPalette,
) {
    let mut lines = Vec::new();
    for theme in state.soundboard.selection.keys() {
        theme_heading(&mut lines, state, theme);
        lines.push(Line::from(vec![
            Span::styled("Balcony: ", Style::default().fg(Color::Green)),
            Span::raw(guides::balcony_text(theme)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Basement: ", Style::default().fg(palette.danger)),
            Span::raw(guides::basement_text(theme)),
        ]));
        lines.push(Line::from(""));
    }
    prompt_lines(&mut lines, &guides::BALCONY_BASEMENT_PROMPTS, palette);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Balconies & Basements", palette)),
        area,
    );
}

fn theme_heading(lines: &mut Vec<Line<'static>>, state: &AppState, theme: ThemeKey) {
    let focused = state.focused_channel_key() == Some(theme);
    let mut style = Style::default()
        .fg(domain_color(theme))
        .add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    lines.push(Line::from(Span::styled(theme.trademarked_name(), style)));
}

fn prompt_lines(lines: &mut Vec<Line<'static>>, prompts: &[&'static str], palette: UiPalette) {
    lines.push(Line::from(Span::styled(
        "Reflect",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    for prompt in prompts {
        lines.push(Line::from(format!("• {prompt}")));
    }
}

fn render_activity(f: &mut ratatui::Frame, area: Rect, state: &AppState, palette: UiPalette) {
    let visible = usize::from(area.height.saturating_sub(2));
    let entries: Vec<_> = state.activity.iter().collect();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Warn => palette.warning,
                LogLevel::Error => palette.danger,
                LogLevel::Debug => palette.muted,
                LogLevel::Info => Color::White,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", entry.source.label()),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(entry.message.to_string(), Style::default().fg(color)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Activity", palette)), area);
}

fn render_overlay(f: &mut ratatui::Frame, state: &AppState, palette: UiPalette) {
    match &state.interaction.overlay {
        Overlay::None => {}
        Overlay::Picker { query, selected } => {
            render_picker(f, state, query, *selected, palette);
        }
        Overlay::Invest => {
            let mut lines = Vec::new();
            for theme in state.soundboard.selection.keys() {
                theme_heading(&mut lines, state, theme);
                match guides::investment_tips(theme) {
                    Some(tips) => {
                        for tip in tips {
                            lines.push(Line::from(format!("• {tip}")));
                        }
                    }
                    None => lines.push(Line::from(Span::styled(
                        guides::NO_INVESTMENT_TIPS,
                        Style::default().fg(palette.muted),
                    ))),
                }
                lines.push(Line::from(""));
            }
            render_popup(f, "Invest in your themes", lines, 70, 70, palette);
        }
        Overlay::ThemeDetail(theme) => {
            let blurb = theme.theme().blurb;
            let lines = vec![
                Line::from(Span::styled(
                    theme.trademarked_name(),
                    Style::default()
                        .fg(domain_color(*theme))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    theme.domain().label(),
                    Style::default().fg(palette.muted),
                )),
                Line::from(""),
                Line::from(if blurb.trim().is_empty() {
                    NO_DESCRIPTION
                } else {
                    blurb
                }),
                Line::from(""),
                Line::from(Span::styled(
                    "o explore coaching questions | Esc close",
                    Style::default().fg(palette.muted),
                )),
            ];
            render_popup(f, "Theme", lines, 50, 40, palette);
        }
        Overlay::Explore { key, prompts } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("Explore {}", key.trademarked_name()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            for (idx, prompt) in prompts.iter().enumerate() {
                let star = if state.favourites.is_starred(*key, prompt) {
                    "★"
                } else {
                    "☆"
                };
                lines.push(Line::from(format!("{} {star} {prompt}", idx + 1)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "1-4 star | r new questions | Esc close",
                Style::default().fg(palette.muted),
            )));
            render_popup(f, "Coaching questions", lines, 60, 50, palette);
        }
        Overlay::Help => {
            let lines = HELP_LINES.iter().map(|line| Line::from(*line)).collect();
            render_popup(f, "Keybindings", lines, 60, 70, palette);
        }
    }
}

const HELP_LINES: &[&str] = &[
    "General",
    "  q / Ctrl+C   Quit",
    "  Tab / S-Tab  Next / previous view",
    "  1..4         Jump to view",
    "  ?            This help",
    "",
    "Soundboard",
    "  a / Enter    Add or remove themes",
    "  ←/→          Focus channel",
    "  ↑/↓ Home End Move the fader (mouse drag works too)",
    "  x            Remove focused theme",
    "  r / R        Reset / randomise levels",
    "  v            Investment ideas",
    "  e / i        Export / import JSON",
    "",
    "Dominant themes",
    "  ←/→ a        Focus slot, pick its theme",
    "  Enter        Theme details",
    "  x / C        Clear slot / whole wheel",
    "  d            Domain colours on/off",
    "  m            Cycle Off / Blend / Reflect",
    "  Space / p    Pick for the pair / reset picks",
    "  w            Write reflection answers",
    "  y            Copy blend to clipboard",
    "  s / n        Export SVG snapshot / notes report",
];

fn render_picker(
    f: &mut ratatui::Frame,
    state: &AppState,
    query: &str,
    selected: usize,
    palette: UiPalette,
) {
    let on_wheel = state.routing.tab == AppTab::Dominant;
    let title = if on_wheel {
        format!("Theme for slot #{}", state.interaction.focus_slot + 1)
    } else {
        format!(
            "Soundboard themes ({}/{})",
            state.soundboard.selection.count(),
            state.soundboard.selection.capacity()
        )
    };
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);
    let block = panel(title, palette).style(Style::default().bg(palette.panel_bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    f.render_widget(
        Paragraph::new(format!("> {query}")).style(Style::default().fg(palette.accent)),
        layout[0],
    );

    let items: Vec<ListItem> = catalog::search(query)
        .into_iter()
        .map(|theme| {
            let marker = if on_wheel {
                state
                    .wheel
                    .selection
                    .position(theme)
                    .map(|slot| format!("#{:<2}", slot + 1))
                    .unwrap_or_else(|| "   ".to_string())
            } else if state.soundboard.selection.contains(theme) {
                "[x]".to_string()
            } else {
                "[ ]".to_string()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.muted)),
                Span::styled(theme.name(), Style::default().fg(domain_color(theme))),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(palette.accent),
    );
    let mut list_state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, layout[1], &mut list_state);
}

fn render_popup(
    f: &mut ratatui::Frame,
    title: &str,
    lines: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
    palette: UiPalette,
) {
    let area = centered_rect(percent_x, percent_y, f.area());
    f.render_widget(Clear, area);
    let block = panel(title, palette).style(Style::default().bg(palette.panel_bg));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState, MouseEvent};
    use csb_core::persistence::MemoryStateStore;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn session() -> Session<MemoryStateStore> {
        Session::with_store(AppState::default(), MemoryStateStore::default())
    }

    fn local() -> UiLocal {
        UiLocal::new(PathBuf::from("exports"))
    }

    fn press(session: &mut Session<MemoryStateStore>, local: &mut UiLocal, code: KeyCode) {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let _ = handle_key_event(key, session, local);
    }

    fn type_text(session: &mut Session<MemoryStateStore>, local: &mut UiLocal, text: &str) {
        for c in text.chars() {
            press(session, local, KeyCode::Char(c));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn fill_wheel(session: &mut Session<MemoryStateStore>) {
        for (slot, key) in ThemeKey::ALL.iter().take(10).enumerate() {
            dispatch(session, UserAction::AssignSlot { slot, key: *key });
        }
    }

    #[test]
    fn picker_on_the_wheel_tab_fills_the_focused_slot() {
        let mut session = session();
        let mut local = local();
        press(&mut session, &mut local, KeyCode::Char('2'));
        press(&mut session, &mut local, KeyCode::Right);
        press(&mut session, &mut local, KeyCode::Char('a'));
        type_text(&mut session, &mut local, "woo");
        press(&mut session, &mut local, KeyCode::Enter);

        assert_eq!(session.state.wheel.selection.slot(1), Some(ThemeKey::Woo));
        assert_eq!(session.state.interaction.overlay, Overlay::None);
    }

    #[test]
    fn quit_key_is_ignored_while_typing_in_the_picker() {
        let mut session = session();
        let mut local = local();
        press(&mut session, &mut local, KeyCode::Char('a'));
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            handle_key_event(key, &mut session, &mut local),
            KeyHandlerResult::Continue(_)
        ));
        match &session.state.interaction.overlay {
            Overlay::Picker { query, .. } => assert_eq!(query, "q"),
            other => panic!("unexpected overlay {other:?}"),
        }
    }

    /// Reflect mode on the wheel tab with the first two slots picked.
    fn reflect_on_first_pair(session: &mut Session<MemoryStateStore>, local: &mut UiLocal) -> PairId {
        fill_wheel(session);
        press(session, local, KeyCode::Char('2'));
        press(session, local, KeyCode::Char('m'));
        press(session, local, KeyCode::Char('m'));
        assert_eq!(session.state.wheel.pairwise.mode(), ExplorationMode::Reflect);

        press(session, local, KeyCode::Char(' '));
        press(session, local, KeyCode::Right);
        press(session, local, KeyCode::Char(' '));
        session.state.wheel.active_pair().expect("pair is ready")
    }

    /// Terminal cell over the middle of `slot`'s wedge.
    fn wedge_cell(session: &Session<MemoryStateStore>, area: Rect, slot: usize) -> (u16, u16) {
        let (wheel_area, _) = dominant_layout(screen_layout(area).body);
        let canvas = wheel_canvas(wheel_area);
        let geometry = session.state.wheel_geometry;
        let (start, end) = geometry.slot_angles(slot);
        let point = wheel::polar_to_cartesian(
            geometry.center(),
            geometry.label_radius(),
            (start + end) / 2.0,
        );
        let column = canvas.x + (point.x / geometry.size * f64::from(canvas.width)) as u16;
        let row = canvas.y + (point.y / geometry.size * f64::from(canvas.height)) as u16;
        (column, row)
    }

    #[test]
    fn editor_saves_answers_for_the_active_pair() {
        let mut session = session();
        let mut local = local();
        let pair = reflect_on_first_pair(&mut session, &mut local);

        press(&mut session, &mut local, KeyCode::Char('w'));
        type_text(&mut session, &mut local, "we plan");
        press(&mut session, &mut local, KeyCode::Enter);

        assert_eq!(session.state.wheel.notes.answer(&pair, 0), "we plan");
        assert_eq!(
            local.editor,
            Some(NoteEditor {
                pair: pair.clone(),
                question: 1,
                buffer: String::new(),
            })
        );

        press(&mut session, &mut local, KeyCode::Esc);
        assert_eq!(local.editor, None);
    }

    #[test]
    fn escape_keeps_what_was_typed() {
        let mut session = session();
        let mut local = local();
        let pair = reflect_on_first_pair(&mut session, &mut local);

        press(&mut session, &mut local, KeyCode::Char('w'));
        press(&mut session, &mut local, KeyCode::Down);
        type_text(&mut session, &mut local, "drafty");
        press(&mut session, &mut local, KeyCode::Backspace);
        assert_eq!(session.state.wheel.notes.answer(&pair, 1), "draft");

        press(&mut session, &mut local, KeyCode::Esc);
        assert_eq!(local.editor, None);
        assert_eq!(session.state.wheel.notes.answer(&pair, 1), "draft");
    }

    #[test]
    fn wheel_clicks_wait_until_writing_is_done() {
        let mut session = session();
        let mut local = local();
        let pair = reflect_on_first_pair(&mut session, &mut local);
        let area = Rect::new(0, 0, 120, 40);

        press(&mut session, &mut local, KeyCode::Char('w'));
        type_text(&mut session, &mut local, "about A and B");
        for slot in [0, 4] {
            let (column, row) = wedge_cell(&session, area, slot);
            assert!(handle_mouse_event(click(column, row), &mut session, &local, area).is_empty());
        }
        press(&mut session, &mut local, KeyCode::Enter);

        assert_eq!(session.state.wheel.active_pair(), Some(pair.clone()));
        assert_eq!(session.state.wheel.notes.answer(&pair, 0), "about A and B");
    }

    #[test]
    fn editor_closes_when_its_pair_is_gone() {
        let mut session = session();
        let mut local = local();
        let pair = reflect_on_first_pair(&mut session, &mut local);
        let keys: Vec<ThemeKey> = ThemeKey::ALL.iter().take(10).copied().collect();

        press(&mut session, &mut local, KeyCode::Char('w'));
        type_text(&mut session, &mut local, "first");
        dispatch(&mut session, UserAction::TogglePick(keys[0]));
        dispatch(&mut session, UserAction::TogglePick(keys[4]));
        let current = session.state.wheel.active_pair().expect("new pair");

        press(&mut session, &mut local, KeyCode::Char('!'));
        assert_eq!(local.editor, None);
        assert_eq!(session.state.wheel.notes.answer(&pair, 0), "first");
        assert_eq!(session.state.wheel.notes.answer(&current, 0), "");
    }

    #[test]
    fn editor_stays_closed_without_a_reflect_pair() {
        let mut session = session();
        let mut local = local();
        press(&mut session, &mut local, KeyCode::Char('2'));
        press(&mut session, &mut local, KeyCode::Char('w'));
        assert_eq!(local.editor, None);
    }

    #[test]
    fn tab_row_clicks_select_tabs() {
        let tabs = Rect::new(0, 1, 120, 3);
        // "1 Soundboard" plus padding covers columns 1..15, then a divider.
        assert_eq!(tab_at(tabs, 1), Some(AppTab::Soundboard));
        assert_eq!(tab_at(tabs, 14), Some(AppTab::Soundboard));
        assert_eq!(tab_at(tabs, 15), None);
        assert_eq!(tab_at(tabs, 16), Some(AppTab::Dominant));
        assert_eq!(tab_at(tabs, 119), None);

        let mut session = session();
        handle_mouse_event(click(18, 2), &mut session, &local(), Rect::new(0, 0, 120, 40));
        assert_eq!(session.state.routing.tab, AppTab::Dominant);
    }

    #[test]
    fn cells_map_to_wheel_coordinates() {
        let canvas = Rect::new(10, 5, 20, 10);
        let close = |a: Point, b: Point| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9;
        let point = cell_to_wheel_point(canvas, 500.0, 10, 5).expect("inside");
        assert!(close(point, Point::new(12.5, 25.0)), "{point:?}");
        let point = cell_to_wheel_point(canvas, 500.0, 29, 14).expect("inside");
        assert!(close(point, Point::new(487.5, 475.0)), "{point:?}");
        assert_eq!(cell_to_wheel_point(canvas, 500.0, 30, 5), None);
    }

    #[test]
    fn clicking_an_empty_wedge_opens_the_picker_for_it() {
        let mut session = session();
        dispatch(&mut session, UserAction::SelectTab(AppTab::Dominant));
        let area = Rect::new(0, 0, 120, 40);
        let (wheel_area, _) = dominant_layout(screen_layout(area).body);
        let canvas = wheel_canvas(wheel_area);

        // Middle of the top edge of the ring sits in the first wedge.
        let geometry = session.state.wheel_geometry;
        let ring = (geometry.r_outer + geometry.r_inner) / 2.0;
        let row_frac = (geometry.center().y - ring) / geometry.size;
        let col_frac = (geometry.center().x + 10.0) / geometry.size;
        let column = canvas.x + (col_frac * f64::from(canvas.width)) as u16;
        let row = canvas.y + (row_frac * f64::from(canvas.height)) as u16;

        handle_mouse_event(click(column, row), &mut session, &local(), area);
        assert_eq!(session.state.interaction.focus_slot, 0);
        assert!(matches!(
            session.state.interaction.overlay,
            Overlay::Picker { .. }
        ));
    }

    #[test]
    fn pressing_the_top_of_a_fader_maxes_it_out() {
        let mut session = session();
        let area = Rect::new(0, 0, 120, 40);
        let body = screen_layout(area).body;
        let faders = soundboard_layout(session.state.soundboard.selection.count(), body);
        let track = fader_track(faders.columns[1]);
        let theme = session.state.soundboard.selection.slot(1).expect("default selection");

        handle_mouse_event(click(track.x + 1, track.y), &mut session, &local(), area);
        assert_eq!(session.state.interaction.focus_channel, 1);
        assert_eq!(session.state.soundboard.level(theme), 100.0);

        let bottom = track.y + track.height - 1;
        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            ..click(track.x + 1, bottom)
        };
        handle_mouse_event(drag, &mut session, &local(), area);
        assert_eq!(session.state.soundboard.level(theme), 0.0);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click(track.x + 1, bottom)
        };
        handle_mouse_event(release, &mut session, &local(), area);
        assert!(session.state.soundboard.drag.is_none());
    }

    #[test]
    fn every_tab_and_overlay_renders() {
        let mut session = session();
        let local = local();
        fill_wheel(&mut session);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");

        for tab in AppTab::ALL {
            dispatch(&mut session, UserAction::SelectTab(tab));
            terminal
                .draw(|f| ui(f, &session.state, &local))
                .expect("draw");
        }
        for action in [
            UserAction::ShowHelp,
            UserAction::OpenPicker,
            UserAction::OpenInvest,
            UserAction::OpenThemeDetail(ThemeKey::Woo),
            UserAction::OpenExplore {
                key: ThemeKey::Woo,
                seed: 7,
            },
        ] {
            dispatch(&mut session, action);
            terminal
                .draw(|f| ui(f, &session.state, &local))
                .expect("draw");
            dispatch(&mut session, UserAction::CloseOverlay);
        }

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Activity"));
    }
}
