//! Soundboard export/import document: `{"selected": [...], "levels": {...}}`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::ThemeKey;
use crate::fader;
use crate::state::SoundboardState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundboardDocument {
    pub selected: Vec<ThemeKey>,
    pub levels: BTreeMap<ThemeKey, f64>,
}

impl SoundboardDocument {
    /// Selected keys with their levels. Unset levels export as the default.
    pub fn from_state(soundboard: &SoundboardState) -> Self {
        let selected = soundboard.selection.keys();
        let levels = selected
            .iter()
            .map(|key| (*key, soundboard.level(*key)))
            .collect();
        Self { selected, levels }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("import is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("import must be a JSON object")]
    NotAnObject,
    #[error("import is missing a `selected` array")]
    MissingSelected,
    #[error("import is missing a `levels` object")]
    MissingLevels,
}

/// Validated import, before it is applied to a soundboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportedSoundboard {
    /// Known keys in file order, first occurrence only.
    pub selected: Vec<ThemeKey>,
    /// Numeric levels for known keys, clamped.
    pub levels: Vec<(ThemeKey, f64)>,
    /// Entries of `selected` that were not known theme keys.
    pub skipped: usize,
}

pub fn parse_import(text: &str) -> Result<ImportedSoundboard, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;
    let selected = object
        .get("selected")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingSelected)?;
    let levels = object
        .get("levels")
        .and_then(Value::as_object)
        .ok_or(ImportError::MissingLevels)?;

    let mut imported = ImportedSoundboard::default();
    for entry in selected {
        match entry.as_str().and_then(ThemeKey::from_key) {
            Some(key) if !imported.selected.contains(&key) => imported.selected.push(key),
            Some(_) => {}
            None => imported.skipped += 1,
        }
    }
    imported.levels = levels
        .iter()
        .filter_map(|(raw, value)| {
            let key = ThemeKey::from_key(raw)?;
            let level = value.as_f64()?;
            Some((key, fader::clamp_level(level)))
        })
        .collect();
    Ok(imported)
}

/// Replaces the selection (truncated to capacity) and merges levels over the
/// existing ones. Selected keys without a level get the default.
pub fn apply_import(soundboard: &mut SoundboardState, imported: &ImportedSoundboard) {
    soundboard.selection.replace_all(&imported.selected);
    for (key, level) in &imported.levels {
        soundboard.levels.set(*key, *level);
    }
    soundboard.levels.ensure_all(&soundboard.selection.keys());
    soundboard.drag = None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn export_lists_selected_levels_only() {
        let mut soundboard = SoundboardState::new(5);
        soundboard.levels.set(ThemeKey::Woo, 10.0);
        soundboard.levels.set(ThemeKey::Belief, 72.0);
        let doc = SoundboardDocument::from_state(&soundboard);
        assert_eq!(doc.selected.len(), 5);
        assert_eq!(doc.levels.len(), 5);
        assert_eq!(doc.levels.get(&ThemeKey::Belief), Some(&72.0));
        assert!(!doc.levels.contains_key(&ThemeKey::Woo));

        let json = doc.to_json_pretty().expect("json");
        assert!(json.contains("\"selected\": ["));
        assert!(json.contains("\"belief\": 72.0"));
    }

    #[test]
    fn import_drops_unknown_keys_and_defaults_levels() {
        let mut soundboard = SoundboardState::new(5);
        let imported = parse_import(
            r#"{"selected":["achiever","not-a-real-key","empathy"],"levels":{"achiever":80}}"#,
        )
        .expect("valid import");
        assert_eq!(imported.skipped, 1);
        apply_import(&mut soundboard, &imported);

        assert_eq!(
            soundboard.selection.keys(),
            vec![ThemeKey::Achiever, ThemeKey::Empathy]
        );
        assert_eq!(soundboard.level(ThemeKey::Achiever), 80.0);
        assert_eq!(soundboard.levels.raw(ThemeKey::Empathy), Some(50.0));
    }

    #[test]
    fn import_matches_keys_exactly() {
        let imported = parse_import(
            r#"{"selected":["ACHIEVER"," empathy ","woo"],"levels":{"Woo":90,"woo":40}}"#,
        )
        .expect("valid import");
        assert_eq!(imported.selected, vec![ThemeKey::Woo]);
        assert_eq!(imported.skipped, 2);
        assert_eq!(imported.levels.len(), 1);
    }

    #[test]
    fn import_truncates_and_dedupes() {
        let mut soundboard = SoundboardState::new(2);
        let imported = parse_import(
            r#"{"selected":["woo","woo",7,"input","focus"],"levels":{"woo":"loud","input":250}}"#,
        )
        .expect("valid import");
        apply_import(&mut soundboard, &imported);
        assert_eq!(soundboard.selection.keys(), vec![ThemeKey::Woo, ThemeKey::Input]);
        assert_eq!(soundboard.level(ThemeKey::Woo), 50.0);
        assert_eq!(soundboard.level(ThemeKey::Input), 100.0);
    }

    #[test]
    fn malformed_imports_are_rejected() {
        assert!(matches!(parse_import("{"), Err(ImportError::InvalidJson(_))));
        assert!(matches!(parse_import("[]"), Err(ImportError::NotAnObject)));
        assert!(matches!(
            parse_import(r#"{"selected":"woo","levels":{}}"#),
            Err(ImportError::MissingSelected)
        ));
        assert!(matches!(
            parse_import(r#"{"selected":[]}"#),
            Err(ImportError::MissingLevels)
        ));
    }
}
