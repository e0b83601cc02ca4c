use std::path::Path;
use std::path::PathBuf;

use csb_core::config::ConfigError;
use csb_core::Config;

const APP_DIR: &str = "csb";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Resolved configuration plus where state lives on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config: Config,
    /// File the config came from, `None` when defaults were used.
    pub source: Option<PathBuf>,
    pub data_dir: PathBuf,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".csb"))
}

/// An explicit `--config` must exist. The default location may be absent.
pub fn load_settings(
    explicit: Option<&Path>,
    data_dir_override: Option<&Path>,
) -> Result<Settings, SettingsError> {
    let (config, source) = match explicit {
        Some(path) => (read_config(path)?, Some(path.to_path_buf())),
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => (read_config(&path)?, Some(path)),
            None => (Config::default(), None),
        },
    };
    config.validate()?;

    let data_dir = data_dir_override
        .map(Path::to_path_buf)
        .or_else(|| config.storage.dir.clone())
        .unwrap_or_else(default_data_dir);

    Ok(Settings {
        config,
        source,
        data_dir,
    })
}

pub fn read_config(path: &Path) -> Result<Config, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_other_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[wheel]\nsize = 600.0\nr_outer = 280.0\n").expect("write config");

        let settings =
            load_settings(Some(&path), Some(dir.path())).expect("settings should load");
        assert_eq!(settings.config.wheel.size, 600.0);
        assert_eq!(settings.config.wheel.r_outer, 280.0);
        assert_eq!(settings.config.wheel.r_inner, 120.0);
        assert_eq!(settings.config.soundboard.capacity, 5);
        assert_eq!(settings.source.as_deref(), Some(path.as_path()));
        assert_eq!(settings.data_dir, dir.path());
    }

    #[test]
    fn storage_dir_from_file_is_used_without_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndir = \"/tmp/csb-state\"\n").expect("write config");

        let settings = load_settings(Some(&path), None).expect("settings should load");
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/csb-state"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_settings(Some(&dir.path().join("nope.toml")), None)
            .expect_err("missing file should fail");
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn malformed_and_invalid_files_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "[wheel\nsize = ").expect("write config");
        assert!(matches!(
            load_settings(Some(&path), None),
            Err(SettingsError::Parse { .. })
        ));

        std::fs::write(&path, "[wheel]\nslots = 0\n").expect("write config");
        assert!(matches!(
            load_settings(Some(&path), None),
            Err(SettingsError::Invalid(ConfigError::NoSlots))
        ));
    }
}
