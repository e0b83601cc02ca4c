use super::*;
use crate::guides;
use pretty_assertions::assert_eq;

#[test]
fn tab_cycle_persists_mode() {
    let mut state = state();
    let effects = user(&mut state, UserAction::NextTab);
    assert_eq!(state.routing.tab, AppTab::Dominant);
    assert_persists(&effects, PersistScope::Mode);

    user(&mut state, UserAction::PrevTab);
    user(&mut state, UserAction::PrevTab);
    assert_eq!(state.routing.tab, AppTab::BalconyBasement);

    assert!(user(&mut state, UserAction::SelectTab(AppTab::BalconyBasement)).is_empty());
}

#[test]
fn overlays_open_and_close() {
    let mut state = state();
    user(&mut state, UserAction::OpenInvest);
    assert_eq!(state.interaction.overlay, Overlay::Invest);
    user(&mut state, UserAction::ShowHelp);
    assert_eq!(state.interaction.overlay, Overlay::Help);
    user(&mut state, UserAction::OpenThemeDetail(ThemeKey::Input));
    assert_eq!(
        state.interaction.overlay,
        Overlay::ThemeDetail(ThemeKey::Input)
    );
    let effects = user(&mut state, UserAction::CloseOverlay);
    assert_eq!(effects, vec![CsbEffect::RequestFrame]);
    assert_eq!(state.interaction.overlay, Overlay::None);
}

#[test]
fn picker_keys_do_nothing_without_picker() {
    let mut state = state();
    assert!(user(&mut state, UserAction::PickerQueryInput('a')).is_empty());
    assert!(user(&mut state, UserAction::PickerMoveDown).is_empty());
    assert!(user(&mut state, UserAction::PickerSubmit).is_empty());
}

#[test]
fn explore_draws_four_distinct_prompts_from_the_bank() {
    let bank = guides::coaching_questions(ThemeKey::Learner);
    let prompts = draw_prompts(ThemeKey::Learner, 11);
    assert_eq!(prompts.len(), 4.min(bank.len()));
    for prompt in &prompts {
        assert!(bank.contains(prompt));
    }
    let mut unique = prompts.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), prompts.len());
    assert_eq!(draw_prompts(ThemeKey::Learner, 11), prompts);
}

#[test]
fn refresh_redraws_for_the_same_theme() {
    let mut state = state();
    user(
        &mut state,
        UserAction::OpenExplore {
            key: ThemeKey::Learner,
            seed: 1,
        },
    );
    user(&mut state, UserAction::RefreshExplore { seed: 2 });
    match &state.interaction.overlay {
        Overlay::Explore { key, prompts } => {
            assert_eq!(*key, ThemeKey::Learner);
            assert_eq!(prompts, &draw_prompts(ThemeKey::Learner, 2));
        }
        other => panic!("unexpected overlay {other:?}"),
    }
}

#[test]
fn starring_a_prompt_persists_favourites() {
    let mut state = state();
    user(
        &mut state,
        UserAction::OpenExplore {
            key: ThemeKey::Relator,
            seed: 3,
        },
    );
    let first = draw_prompts(ThemeKey::Relator, 3)[0];

    let effects = user(&mut state, UserAction::ToggleFavourite(0));
    assert_persists(&effects, PersistScope::Favourites);
    assert!(state.favourites.is_starred(ThemeKey::Relator, first));

    user(&mut state, UserAction::ToggleFavourite(0));
    assert!(!state.favourites.is_starred(ThemeKey::Relator, first));

    assert!(user(&mut state, UserAction::ToggleFavourite(40)).is_empty());
}
