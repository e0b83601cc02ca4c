use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::actions::PersistScope;
use crate::catalog::ThemeKey;
use crate::fader;
use crate::state::AppState;
use crate::state::AppTab;
use crate::state::Favourites;
use crate::state::LogLevel;
use crate::state::LogSource;
use crate::state::RankedSelection;

pub const KEY_MODE: &str = "csb:mode";
pub const KEY_SELECTED: &str = "csb:selected";
pub const KEY_LEVELS: &str = "csb:levels";
pub const KEY_WHEEL: &str = "soundboard_dominant_themes_v1";
pub const KEY_FAVOURITES: &str = "soundboard_theme_question_favourites_v1";

/// Device-local key/value storage holding one JSON document per key.
pub trait StateStore {
    fn read(&self, key: &str) -> std::io::Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl StateStore for FileStateStore {
    fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path).map(Some)
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let mut opts = OpenOptions::new();
        opts.create(true).write(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o600);
        }
        let mut file = opts.open(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);
        std::fs::rename(tmp, path)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStateStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStateStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> std::io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored shape of the wheel. Keys are kept as strings so one unknown entry
/// only empties its slot instead of discarding the whole wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWheel {
    pub slots: Vec<Option<String>>,
    #[serde(default = "default_true")]
    pub show_domain_colours: bool,
}

fn default_true() -> bool {
    true
}

/// Loads every persisted slice into `state`. Anything unreadable keeps its
/// default and leaves a warning in the activity log.
pub fn hydrate_state(state: &mut AppState, store: &dyn StateStore) {
    if let Some(tab) = load::<AppTab>(state, store, KEY_MODE) {
        state.routing.tab = tab;
    }

    if let Some(raw) = load::<Vec<Value>>(state, store, KEY_SELECTED) {
        let keys: Vec<ThemeKey> = raw
            .iter()
            .filter_map(|value| value.as_str().and_then(ThemeKey::from_key))
            .collect();
        let capacity = state.soundboard.selection.capacity();
        state.soundboard.selection = RankedSelection::compact_from_keys(capacity, &keys);
    }

    if let Some(raw) = load::<BTreeMap<String, Value>>(state, store, KEY_LEVELS) {
        for (key, value) in raw {
            if let (Some(key), Some(level)) = (ThemeKey::from_key(&key), value.as_f64()) {
                state.soundboard.levels.set(key, fader::clamp_level(level));
            }
        }
    }
    let selected = state.soundboard.selection.keys();
    state.soundboard.levels.ensure_all(&selected);

    if let Some(wheel) = load::<PersistedWheel>(state, store, KEY_WHEEL) {
        let slots: Vec<Option<ThemeKey>> = wheel
            .slots
            .iter()
            .map(|slot| slot.as_deref().and_then(ThemeKey::from_key))
            .collect();
        let capacity = state.wheel.selection.capacity();
        state.wheel.selection = RankedSelection::ranked_from_slots(capacity, &slots);
        state.wheel.show_domain_colours = wheel.show_domain_colours;
    }

    if let Some(favourites) = load::<Favourites>(state, store, KEY_FAVOURITES) {
        state.favourites = favourites;
    }

    tracing::debug!(
        tab = state.routing.tab.label(),
        soundboard = state.soundboard.selection.count(),
        wheel = state.wheel.selection.count(),
        "hydrated state"
    );
}

fn load<T: DeserializeOwned>(
    state: &mut AppState,
    store: &dyn StateStore,
    key: &str,
) -> Option<T> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read persisted state");
            state.log(
                LogLevel::Warn,
                LogSource::Store,
                format!("Could not read {key}: {err}"),
            );
            return None;
        }
    };
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring malformed persisted state");
            state.log(
                LogLevel::Warn,
                LogSource::Store,
                format!("Ignored malformed {key}; using defaults"),
            );
            None
        }
    }
}

/// Serialised value for each store key of `scope`.
pub fn persisted_entries(
    state: &AppState,
    scope: PersistScope,
) -> serde_json::Result<Vec<(&'static str, String)>> {
    let entries = match scope {
        PersistScope::Mode => vec![(KEY_MODE, serde_json::to_string(&state.routing.tab)?)],
        PersistScope::Soundboard => vec![
            (
                KEY_SELECTED,
                serde_json::to_string(&state.soundboard.selection.keys())?,
            ),
            (KEY_LEVELS, serde_json::to_string(&state.soundboard.levels)?),
        ],
        PersistScope::Wheel => {
            let wheel = PersistedWheel {
                slots: state
                    .wheel
                    .selection
                    .slots()
                    .iter()
                    .map(|slot| slot.map(|key| key.as_str().to_string()))
                    .collect(),
                show_domain_colours: state.wheel.show_domain_colours,
            };
            vec![(KEY_WHEEL, serde_json::to_string(&wheel)?)]
        }
        PersistScope::Favourites => {
            vec![(KEY_FAVOURITES, serde_json::to_string(&state.favourites)?)]
        }
    };
    Ok(entries)
}

pub fn persist_state(
    state: &AppState,
    store: &mut dyn StateStore,
    scope: PersistScope,
) -> std::io::Result<()> {
    let entries = persisted_entries(state, scope)
        .map_err(|err| std::io::Error::other(format!("serialize: {err}")))?;
    for (key, value) in entries {
        store.write(key, &value)?;
    }
    Ok(())
}

pub fn persist_all(state: &AppState, store: &mut dyn StateStore) -> std::io::Result<()> {
    for scope in [
        PersistScope::Mode,
        PersistScope::Soundboard,
        PersistScope::Wheel,
        PersistScope::Favourites,
    ] {
        persist_state(state, store, scope)?;
    }
    Ok(())
}
