use super::*;
use pretty_assertions::assert_eq;

#[test]
fn set_level_clamps_to_range() {
    let mut state = state();
    let effects = user(
        &mut state,
        UserAction::SetLevel {
            key: ThemeKey::Maximizer,
            value: 120.0,
        },
    );
    assert_eq!(state.soundboard.level(ThemeKey::Maximizer), 100.0);
    assert_persists(&effects, PersistScope::Soundboard);

    user(
        &mut state,
        UserAction::SetLevel {
            key: ThemeKey::Maximizer,
            value: -3.0,
        },
    );
    assert_eq!(state.soundboard.level(ThemeKey::Maximizer), 0.0);
}

#[test]
fn levels_of_unselected_themes_are_ignored() {
    let mut state = state();
    let effects = user(
        &mut state,
        UserAction::SetLevel {
            key: ThemeKey::Woo,
            value: 10.0,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.soundboard.levels.raw(ThemeKey::Woo), None);
}

#[test]
fn toggling_five_times_ends_deselected_with_prior_level() {
    let mut state = state();
    user(
        &mut state,
        UserAction::SetLevel {
            key: ThemeKey::Maximizer,
            value: 70.0,
        },
    );
    for _ in 0..5 {
        user(
            &mut state,
            UserAction::ToggleSoundboardTheme(ThemeKey::Maximizer),
        );
    }
    assert!(!state.soundboard.selection.contains(ThemeKey::Maximizer));
    assert_eq!(state.soundboard.levels.raw(ThemeKey::Maximizer), Some(70.0));

    user(
        &mut state,
        UserAction::ToggleSoundboardTheme(ThemeKey::Maximizer),
    );
    assert!(state.soundboard.selection.contains(ThemeKey::Maximizer));
    assert_eq!(state.soundboard.level(ThemeKey::Maximizer), 70.0);
}

#[test]
fn newly_selected_theme_starts_at_fifty() {
    let mut state = state();
    user(
        &mut state,
        UserAction::ToggleSoundboardTheme(ThemeKey::Empathy),
    );
    user(&mut state, UserAction::ToggleSoundboardTheme(ThemeKey::Woo));
    assert_eq!(state.soundboard.levels.raw(ThemeKey::Woo), Some(50.0));
    assert_eq!(
        state.soundboard.selection.keys().last().copied(),
        Some(ThemeKey::Woo)
    );
}

#[test]
fn full_soundboard_rejects_sixth_theme() {
    let mut state = state();
    let before = state.soundboard.selection.keys();
    let effects = user(&mut state, UserAction::ToggleSoundboardTheme(ThemeKey::Woo));
    assert_eq!(effects, vec![CsbEffect::RequestFrame]);
    assert_eq!(state.soundboard.selection.keys(), before);
    assert_eq!(
        messages(&state),
        vec!["Soundboard holds 5 themes; remove one first"]
    );
}

#[test]
fn keyboard_adjusts_focused_fader() {
    let mut state = state();
    let key = ThemeKey::Maximizer;
    user(
        &mut state,
        UserAction::AdjustLevel {
            key,
            input: FaderKey::Up,
        },
    );
    assert_eq!(state.soundboard.level(key), 52.0);
    user(
        &mut state,
        UserAction::AdjustLevel {
            key,
            input: FaderKey::End,
        },
    );
    user(
        &mut state,
        UserAction::AdjustLevel {
            key,
            input: FaderKey::Up,
        },
    );
    assert_eq!(state.soundboard.level(key), 100.0);
    user(
        &mut state,
        UserAction::AdjustLevel {
            key,
            input: FaderKey::Home,
        },
    );
    assert_eq!(state.soundboard.level(key), 0.0);
}

#[test]
fn drag_updates_until_release_and_persists_once() {
    let mut state = state();
    let key = ThemeKey::Belief;
    let effects = user(
        &mut state,
        UserAction::BeginFaderDrag {
            key,
            pointer_y: 44.0,
            track_top: 0.0,
        },
    );
    assert_eq!(effects, vec![CsbEffect::RequestFrame]);
    assert_eq!(state.soundboard.level(key), 100.0);
    assert_eq!(state.interaction.focus_channel, 2);

    user(&mut state, UserAction::DragFader { pointer_y: 160.0 });
    assert_eq!(state.soundboard.level(key), 50.0);

    let effects = user(&mut state, UserAction::EndFaderDrag);
    assert_persists(&effects, PersistScope::Soundboard);
    assert!(state.soundboard.drag.is_none());

    let effects = user(&mut state, UserAction::DragFader { pointer_y: 0.0 });
    assert!(effects.is_empty());
    assert_eq!(state.soundboard.level(key), 50.0);
}

#[test]
fn reset_and_randomize_touch_selected_only() {
    let mut state = state();
    state.soundboard.levels.set(ThemeKey::Woo, 3.0);
    user(&mut state, UserAction::RandomizeLevels { seed: 7 });
    let first: Vec<f64> = state
        .soundboard
        .selection
        .keys()
        .iter()
        .map(|key| state.soundboard.level(*key))
        .collect();
    assert!(first
        .iter()
        .all(|value| (0.0..=100.0).contains(value) && value.fract() == 0.0));

    let mut again = AppState::default();
    user(&mut again, UserAction::RandomizeLevels { seed: 7 });
    let second: Vec<f64> = again
        .soundboard
        .selection
        .keys()
        .iter()
        .map(|key| again.soundboard.level(*key))
        .collect();
    assert_eq!(first, second);

    user(&mut state, UserAction::ResetLevels);
    for key in state.soundboard.selection.keys() {
        assert_eq!(state.soundboard.level(key), 50.0);
    }
    assert_eq!(state.soundboard.levels.raw(ThemeKey::Woo), Some(3.0));
}

#[test]
fn removing_focused_last_channel_moves_focus_back() {
    let mut state = state();
    user(&mut state, UserAction::FocusPrevChannel);
    assert_eq!(state.interaction.focus_channel, 4);
    user(
        &mut state,
        UserAction::ToggleSoundboardTheme(ThemeKey::Empathy),
    );
    assert_eq!(state.interaction.focus_channel, 3);
    assert_eq!(state.focused_channel_key(), Some(ThemeKey::Adaptability));
}

#[test]
fn picker_filters_and_toggles_highlighted_theme() {
    let mut state = state();
    user(&mut state, UserAction::ToggleSoundboardTheme(ThemeKey::Belief));
    user(&mut state, UserAction::OpenPicker);
    for ch in "WO".chars() {
        user(&mut state, UserAction::PickerQueryInput(ch));
    }
    user(&mut state, UserAction::PickerMoveDown);
    assert!(matches!(
        &state.interaction.overlay,
        Overlay::Picker { query, selected: 0 } if query == "WO"
    ));
    let effects = user(&mut state, UserAction::PickerSubmit);
    assert_persists(&effects, PersistScope::Soundboard);
    assert!(state.soundboard.selection.contains(ThemeKey::Woo));
}

#[test]
fn focusing_a_channel_requires_a_selected_theme() {
    let mut state = state();
    user(&mut state, UserAction::FocusChannel(3));
    assert_eq!(state.focused_channel_key(), Some(ThemeKey::Adaptability));
    assert!(user(&mut state, UserAction::FocusChannel(5)).is_empty());
    assert_eq!(state.interaction.focus_channel, 3);
}
