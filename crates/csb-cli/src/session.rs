use anyhow::Context;
use anyhow::Result;
use csb_core::persistence::FileStateStore;
use csb_core::persistence::StateStore;
use csb_core::reduce;
use csb_core::AppAction;
use csb_core::AppState;
use csb_core::CsbEffect;
use csb_core::LogLevel;
use csb_core::LogSource;

use crate::settings::Settings;

/// Application state bound to the store it hydrates from and persists to.
pub struct Session<S: StateStore> {
    pub state: AppState,
    store: S,
}

impl Session<FileStateStore> {
    pub fn open(settings: &Settings) -> Result<Self> {
        let store = FileStateStore::open(&settings.data_dir).with_context(|| {
            format!(
                "failed to open state directory {}",
                settings.data_dir.display()
            )
        })?;
        tracing::info!(data_dir = %settings.data_dir.display(), "opened state store");
        Ok(Self::with_store(AppState::new(&settings.config), store))
    }
}

impl<S: StateStore> Session<S> {
    pub fn with_store(mut state: AppState, store: S) -> Self {
        csb_core::hydrate_state(&mut state, &store);
        Self { state, store }
    }

    /// Reduce `action`, write any persisted scopes, and hand back the rest.
    pub fn dispatch(&mut self, action: AppAction) -> Vec<CsbEffect> {
        let effects = reduce(&mut self.state, action);
        self.apply_persistence(effects)
    }

    fn apply_persistence(&mut self, effects: Vec<CsbEffect>) -> Vec<CsbEffect> {
        let mut remaining = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                CsbEffect::Persist(scope) => {
                    if let Err(err) = csb_core::persist_state(&self.state, &mut self.store, scope) {
                        tracing::warn!(?scope, error = %err, "failed to persist state");
                        self.state.log(
                            LogLevel::Warn,
                            LogSource::Store,
                            format!("Could not save changes: {err}"),
                        );
                    }
                }
                other => remaining.push(other),
            }
        }
        remaining
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}
