use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

use super::actions::AppAction;
use super::actions::ExportKind;
use super::actions::PersistScope;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::blend;
use super::catalog;
use super::catalog::ThemeKey;
use super::document;
use super::fader;
use super::fader::FaderDrag;
use super::guides;
use super::state::AppState;
use super::state::AppTab;
use super::state::AssignOutcome;
use super::state::ExplorationMode;
use super::state::LogLevel;
use super::state::LogSource;
use super::state::Overlay;
use super::state::PickOutcome;
use super::state::SlotTarget;
use super::state::ToggleOutcome;
use super::state::WHEEL_PLACEHOLDER;

/// Prompts shown at once in the explore overlay.
pub const EXPLORE_PROMPT_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsbEffect {
    RequestFrame,
    Persist(PersistScope),
    Export(ExportKind),
    CopyToClipboard(String),
}

pub fn reduce(state: &mut AppState, action: AppAction) -> Vec<CsbEffect> {
    match action {
        AppAction::User(user) => reduce_user(state, user),
        AppAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_user(state: &mut AppState, action: UserAction) -> Vec<CsbEffect> {
    match action {
        UserAction::NextTab => {
            state.routing.tab = state.routing.tab.next();
            tab_changed()
        }
        UserAction::PrevTab => {
            state.routing.tab = state.routing.tab.prev();
            tab_changed()
        }
        UserAction::SelectTab(tab) => {
            if state.routing.tab == tab {
                return Vec::new();
            }
            state.routing.tab = tab;
            tab_changed()
        }
        UserAction::CloseOverlay => {
            state.interaction.overlay = Overlay::None;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::ShowHelp => {
            state.interaction.overlay = Overlay::Help;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::OpenPicker => {
            state.interaction.overlay = Overlay::Picker {
                query: String::new(),
                selected: 0,
            };
            vec![CsbEffect::RequestFrame]
        }
        UserAction::PickerQueryInput(ch) => {
            if let Overlay::Picker { query, selected } = &mut state.interaction.overlay {
                query.push(ch);
                *selected = 0;
                return vec![CsbEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::PickerQueryBackspace => {
            if let Overlay::Picker { query, selected } = &mut state.interaction.overlay {
                query.pop();
                *selected = 0;
                return vec![CsbEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::PickerMoveUp => {
            if let Overlay::Picker { query, selected } = &mut state.interaction.overlay {
                let filtered = catalog::search(query);
                if !filtered.is_empty() {
                    if *selected == 0 {
                        *selected = filtered.len().saturating_sub(1);
                    } else {
                        *selected -= 1;
                    }
                }
                return vec![CsbEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::PickerMoveDown => {
            if let Overlay::Picker { query, selected } = &mut state.interaction.overlay {
                let filtered = catalog::search(query);
                if !filtered.is_empty() {
                    *selected = (*selected + 1) % filtered.len();
                }
                return vec![CsbEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::PickerSubmit => {
            let Overlay::Picker { query, selected } = &state.interaction.overlay else {
                return Vec::new();
            };
            let Some(key) = catalog::search(query).get(*selected).copied() else {
                return Vec::new();
            };
            if state.routing.tab != AppTab::Dominant {
                return toggle_soundboard(state, key);
            }
            // On the wheel tab the picker fills the focused slot and closes.
            state.interaction.overlay = Overlay::None;
            let slot = state.interaction.focus_slot;
            let effects = reduce_user(state, UserAction::AssignSlot { slot, key });
            if effects.is_empty() {
                vec![CsbEffect::RequestFrame]
            } else {
                effects
            }
        }
        UserAction::ToggleSoundboardTheme(key) => toggle_soundboard(state, key),
        UserAction::FocusChannel(idx) => {
            if idx >= state.soundboard.selection.count() || idx == state.interaction.focus_channel {
                return Vec::new();
            }
            state.interaction.focus_channel = idx;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::FocusNextChannel => {
            let count = state.soundboard.selection.count();
            if count > 0 {
                state.interaction.focus_channel = (state.interaction.focus_channel + 1) % count;
            }
            vec![CsbEffect::RequestFrame]
        }
        UserAction::FocusPrevChannel => {
            let count = state.soundboard.selection.count();
            if count > 0 {
                state.interaction.focus_channel =
                    (state.interaction.focus_channel + count - 1) % count;
            }
            vec![CsbEffect::RequestFrame]
        }
        UserAction::SetLevel { key, value } => set_level(state, key, value, true),
        UserAction::AdjustLevel { key, input } => {
            let current = state.soundboard.level(key);
            let next = state.fader_geometry.apply_key(current, input);
            set_level(state, key, next, true)
        }
        UserAction::BeginFaderDrag {
            key,
            pointer_y,
            track_top,
        } => {
            if !state.soundboard.selection.contains(key) {
                return Vec::new();
            }
            state.soundboard.drag = Some(FaderDrag { key, track_top });
            if let Some(idx) = state.soundboard.selection.position(key) {
                state.interaction.focus_channel = idx;
            }
            let value = state.fader_geometry.pointer_to_value(pointer_y, track_top);
            set_level(state, key, value, false)
        }
        UserAction::DragFader { pointer_y } => {
            let Some(drag) = state.soundboard.drag else {
                return Vec::new();
            };
            let value = state
                .fader_geometry
                .pointer_to_value(pointer_y, drag.track_top);
            set_level(state, drag.key, value, false)
        }
        UserAction::EndFaderDrag => {
            if state.soundboard.drag.take().is_none() {
                return Vec::new();
            }
            vec![
                CsbEffect::RequestFrame,
                CsbEffect::Persist(PersistScope::Soundboard),
            ]
        }
        UserAction::ResetLevels => {
            for key in state.soundboard.selection.keys() {
                state.soundboard.levels.set(key, fader::DEFAULT_LEVEL);
            }
            soundboard_changed()
        }
        UserAction::RandomizeLevels { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            for key in state.soundboard.selection.keys() {
                let value: u32 = rng.gen_range(0..=100);
                state.soundboard.levels.set(key, f64::from(value));
            }
            soundboard_changed()
        }
        UserAction::OpenInvest => {
            state.interaction.overlay = Overlay::Invest;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::AssignSlot { slot, key } => {
            match state.wheel.selection.assign(SlotTarget::Slot(slot), key) {
                AssignOutcome::Placed { displaced, .. } => {
                    if let Some(displaced) = displaced {
                        forget_wheel_key(state, displaced);
                    }
                    state.interaction.focus_slot = slot;
                    wheel_changed()
                }
                AssignOutcome::Unchanged => Vec::new(),
            }
        }
        UserAction::ClearSlot(slot) => match state.wheel.selection.clear_slot(slot) {
            Some(key) => {
                forget_wheel_key(state, key);
                wheel_changed()
            }
            None => Vec::new(),
        },
        UserAction::ClearWheel => {
            state.wheel.selection.clear_all();
            state.wheel.pairwise.turn_off();
            state.wheel.notes.clear();
            if matches!(state.interaction.overlay, Overlay::ThemeDetail(_)) {
                state.interaction.overlay = Overlay::None;
            }
            state.interaction.focus_slot = 0;
            wheel_changed()
        }
        UserAction::FocusSlot(slot) => {
            if slot >= state.wheel.selection.capacity() || slot == state.interaction.focus_slot {
                return Vec::new();
            }
            state.interaction.focus_slot = slot;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::FocusNextSlot => {
            let slots = state.wheel.selection.capacity().max(1);
            state.interaction.focus_slot = (state.interaction.focus_slot + 1) % slots;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::FocusPrevSlot => {
            let slots = state.wheel.selection.capacity().max(1);
            state.interaction.focus_slot = (state.interaction.focus_slot + slots - 1) % slots;
            vec![CsbEffect::RequestFrame]
        }
        UserAction::ToggleDomainColours => {
            state.wheel.show_domain_colours = !state.wheel.show_domain_colours;
            wheel_changed()
        }
        UserAction::SetExplorationMode(mode) => set_exploration_mode(state, mode),
        UserAction::CycleExplorationMode => {
            let next = state.wheel.pairwise.mode().next();
            set_exploration_mode(state, next)
        }
        UserAction::TogglePick(key) => {
            let eligible = state.wheel_full() && state.wheel.selection.contains(key);
            match state.wheel.pairwise.toggle_pick(key, eligible) {
                PickOutcome::Added | PickOutcome::Removed => vec![CsbEffect::RequestFrame],
                PickOutcome::Blocked | PickOutcome::Ineligible => Vec::new(),
            }
        }
        UserAction::ResetPicks => {
            state.wheel.pairwise.reset_picks();
            vec![CsbEffect::RequestFrame]
        }
        UserAction::SetNoteAnswer {
            pair,
            question,
            text,
            ts_ms,
        } => {
            if state.wheel.pairwise.mode() != ExplorationMode::Reflect {
                return Vec::new();
            }
            if state.wheel.active_pair().as_ref() != Some(&pair) {
                return Vec::new();
            }
            if state.wheel.notes.set_answer(pair, question, text, ts_ms) {
                vec![CsbEffect::RequestFrame]
            } else {
                Vec::new()
            }
        }
        UserAction::OpenThemeDetail(key) => {
            state.interaction.overlay = Overlay::ThemeDetail(key);
            vec![CsbEffect::RequestFrame]
        }
        UserAction::CopyBlend => {
            let Some((a, b)) = state.wheel.pairwise.pair() else {
                return Vec::new();
            };
            let text = blend::blend(a, b).to_plain_text();
            state.log(
                LogLevel::Info,
                LogSource::App,
                format!("Copied blend {} + {}", a.name(), b.name()),
            );
            vec![CsbEffect::CopyToClipboard(text), CsbEffect::RequestFrame]
        }
        UserAction::OpenExplore { key, seed } => {
            state.interaction.overlay = Overlay::Explore {
                key,
                prompts: draw_prompts(key, seed),
            };
            vec![CsbEffect::RequestFrame]
        }
        UserAction::RefreshExplore { seed } => {
            if let Overlay::Explore { key, prompts } = &mut state.interaction.overlay {
                *prompts = draw_prompts(*key, seed);
                return vec![CsbEffect::RequestFrame];
            }
            Vec::new()
        }
        UserAction::ToggleFavourite(idx) => {
            let Overlay::Explore { key, prompts } = &state.interaction.overlay else {
                return Vec::new();
            };
            let Some(question) = prompts.get(idx).copied() else {
                return Vec::new();
            };
            let key = *key;
            state.favourites.toggle(key, question);
            vec![
                CsbEffect::RequestFrame,
                CsbEffect::Persist(PersistScope::Favourites),
            ]
        }
        UserAction::RequestExport(kind) => {
            let needs_wheel = matches!(kind, ExportKind::WheelSnapshot | ExportKind::NotesReport);
            if needs_wheel && !state.wheel_full() {
                state.log(LogLevel::Warn, LogSource::Export, WHEEL_PLACEHOLDER);
                return vec![CsbEffect::RequestFrame];
            }
            vec![CsbEffect::Export(kind)]
        }
    }
}

fn reduce_runtime(state: &mut AppState, action: RuntimeAction) -> Vec<CsbEffect> {
    match action {
        RuntimeAction::ApplyImport { source, contents } => {
            match document::parse_import(&contents) {
                Ok(imported) => {
                    document::apply_import(&mut state.soundboard, &imported);
                    clamp_channel_focus(state);
                    let count = state.soundboard.selection.count();
                    tracing::info!(%source, count, skipped = imported.skipped, "imported soundboard");
                    state.log(
                        LogLevel::Info,
                        LogSource::Import,
                        format!(
                            "Imported {count} themes from {source} ({} skipped)",
                            imported.skipped
                        ),
                    );
                    soundboard_changed()
                }
                Err(err) => {
                    tracing::warn!(%source, error = %err, "rejected import");
                    state.log(
                        LogLevel::Warn,
                        LogSource::Import,
                        format!("Import from {source} rejected: {err}"),
                    );
                    vec![CsbEffect::RequestFrame]
                }
            }
        }
        RuntimeAction::ImportFailed { source, message } => {
            state.log(
                LogLevel::Warn,
                LogSource::Import,
                format!("Could not read {source}: {message}"),
            );
            vec![CsbEffect::RequestFrame]
        }
        RuntimeAction::ExportFinished { kind, target } => {
            state.log(
                LogLevel::Info,
                LogSource::Export,
                format!("Saved {} to {target}", kind.label()),
            );
            vec![CsbEffect::RequestFrame]
        }
        RuntimeAction::ExportFailed { kind, message } => {
            state.log(
                LogLevel::Warn,
                LogSource::Export,
                format!("Export of {} failed: {message}", kind.label()),
            );
            vec![CsbEffect::RequestFrame]
        }
        RuntimeAction::AppendLog(entry) => {
            state.activity.append(entry);
            vec![CsbEffect::RequestFrame]
        }
        RuntimeAction::ClearLogs => {
            state.activity.clear();
            vec![CsbEffect::RequestFrame]
        }
    }
}

fn tab_changed() -> Vec<CsbEffect> {
    vec![CsbEffect::RequestFrame, CsbEffect::Persist(PersistScope::Mode)]
}

fn soundboard_changed() -> Vec<CsbEffect> {
    vec![
        CsbEffect::RequestFrame,
        CsbEffect::Persist(PersistScope::Soundboard),
    ]
}

fn wheel_changed() -> Vec<CsbEffect> {
    vec![CsbEffect::RequestFrame, CsbEffect::Persist(PersistScope::Wheel)]
}

fn toggle_soundboard(state: &mut AppState, key: ThemeKey) -> Vec<CsbEffect> {
    match state.soundboard.selection.toggle(key) {
        ToggleOutcome::Added => {
            state.soundboard.levels.ensure(key);
            soundboard_changed()
        }
        ToggleOutcome::Removed => {
            if state.soundboard.drag.is_some_and(|drag| drag.key == key) {
                state.soundboard.drag = None;
            }
            clamp_channel_focus(state);
            soundboard_changed()
        }
        ToggleOutcome::Rejected => {
            let capacity = state.soundboard.selection.capacity();
            state.log(
                LogLevel::Info,
                LogSource::App,
                format!("Soundboard holds {capacity} themes; remove one first"),
            );
            vec![CsbEffect::RequestFrame]
        }
    }
}

fn set_level(state: &mut AppState, key: ThemeKey, value: f64, persist: bool) -> Vec<CsbEffect> {
    if !state.soundboard.selection.contains(key) {
        return Vec::new();
    }
    state.soundboard.levels.set(key, value);
    if persist {
        soundboard_changed()
    } else {
        vec![CsbEffect::RequestFrame]
    }
}

fn clamp_channel_focus(state: &mut AppState) {
    let count = state.soundboard.selection.count();
    if state.interaction.focus_channel >= count {
        state.interaction.focus_channel = count.saturating_sub(1);
    }
}

fn forget_wheel_key(state: &mut AppState, key: ThemeKey) {
    state.wheel.pairwise.forget(key);
}

fn set_exploration_mode(state: &mut AppState, mode: ExplorationMode) -> Vec<CsbEffect> {
    let wheel_full = state.wheel_full();
    if state.wheel.pairwise.set_mode(mode, wheel_full) {
        return vec![CsbEffect::RequestFrame];
    }
    if mode != ExplorationMode::Off && !wheel_full {
        state.log(LogLevel::Info, LogSource::App, WHEEL_PLACEHOLDER);
        return vec![CsbEffect::RequestFrame];
    }
    Vec::new()
}

/// Up to [`EXPLORE_PROMPT_COUNT`] questions from the theme's bank in a seeded order.
pub fn draw_prompts(key: ThemeKey, seed: u64) -> Vec<&'static str> {
    let mut bank = guides::coaching_questions(key).to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    bank.shuffle(&mut rng);
    bank.truncate(EXPLORE_PROMPT_COUNT);
    bank
}

#[cfg(test)]
mod tests;
