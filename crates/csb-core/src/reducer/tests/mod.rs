use pretty_assertions::assert_eq;

pub(super) use super::draw_prompts;
pub(super) use super::reduce;
pub(super) use super::CsbEffect;
pub(super) use crate::actions::AppAction;
pub(super) use crate::actions::ExportKind;
pub(super) use crate::actions::PersistScope;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::catalog::ThemeKey;
pub(super) use crate::fader::FaderKey;
pub(super) use crate::state::AppState;
pub(super) use crate::state::AppTab;
pub(super) use crate::state::ExplorationMode;
pub(super) use crate::state::ExplorationPhase;
pub(super) use crate::state::LogBuffer;
pub(super) use crate::state::LogEntry;
pub(super) use crate::state::LogLevel;
pub(super) use crate::state::LogSource;
pub(super) use crate::state::Overlay;
pub(super) use crate::state::PairId;

mod overlays;
mod soundboard;

fn state() -> AppState {
    AppState::default()
}

/// First ten themes in catalogue order.
fn ten_keys() -> Vec<ThemeKey> {
    ThemeKey::ALL.iter().take(10).copied().collect()
}

fn user(state: &mut AppState, action: UserAction) -> Vec<CsbEffect> {
    reduce(state, AppAction::User(action))
}

fn run_runtime(state: &mut AppState, action: RuntimeAction) -> Vec<CsbEffect> {
    reduce(state, AppAction::Runtime(action))
}

fn fill_wheel(state: &mut AppState) {
    for (slot, key) in ten_keys().into_iter().enumerate() {
        user(state, UserAction::AssignSlot { slot, key });
    }
    assert!(state.wheel_full());
}

fn assert_persists(effects: &[CsbEffect], scope: PersistScope) {
    assert!(
        effects.contains(&CsbEffect::Persist(scope)),
        "expected Persist({scope:?}) in {effects:?}"
    );
}

fn messages(state: &AppState) -> Vec<String> {
    state
        .activity
        .iter()
        .map(|entry| entry.message.to_string())
        .collect()
}

#[test]
fn helpers_build_a_full_wheel() {
    let mut state = state();
    fill_wheel(&mut state);
    assert_eq!(state.wheel.selection.keys(), ten_keys());
}
