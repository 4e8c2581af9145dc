use crate::base::Config;

const APP_DIR: &str = "outlay";
const STORE_FILE: &str = "outlay.db";
const CONFIG_FILE: &str = "config.json";

/// Application filesystem. Anchors the directory holding the expense store
/// and the optional config file.
pub struct Fs {
    dir: std::path::PathBuf,
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    /// Anchors at the fixed per-user location, creating the directory on
    /// first run.
    pub fn resolve() -> Result<Self, ResolveError> {
        let dir = dirs::config_dir()
            .ok_or(ResolveError::NoConfigDir)?
            .join(APP_DIR);
        std::fs::create_dir_all(&dir)?;
        Ok(Self::new(dir))
    }

    pub fn store_path(&self) -> std::path::PathBuf {
        self.dir.join(STORE_FILE)
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Reads the config file. A missing file yields `Config::default()`.
    pub fn read_config(&self) -> Result<Config, ReadError> {
        match std::fs::read_to_string(self.config_path()) {
            Ok(s) => s.parse().map_err(ReadError::Serde),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(Config::default()),
                _ => Err(ReadError::Io(e)),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a filesystem object anchored at a temporary directory. The
    /// `Fs` must not outlive the returned `TempDir`.
    fn tempfs() -> (Fs, tempfile::TempDir) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = Fs::new(td.path());
        (fs, td)
    }

    #[test]
    fn test_paths_are_distinct() {
        let (fs, _td) = tempfs();
        assert_ne!(fs.store_path(), fs.config_path());
    }

    #[test]
    fn test_read_config_missing_file_yields_default() {
        let (fs, _td) = tempfs();
        assert_eq!(fs.read_config().unwrap(), Config::default());
    }

    #[test]
    fn test_read_config() {
        let (fs, _td) = tempfs();
        std::fs::write(fs.config_path(), r#"{"useColoredOutput": false}"#).unwrap();
        let config = fs.read_config().unwrap();
        assert_eq!(config.use_colored_output, false);
        assert_eq!(config.line_width, 80);
    }

    #[test]
    fn test_read_config_malformed_is_an_error() {
        let (fs, _td) = tempfs();
        std::fs::write(fs.config_path(), "not json").unwrap();
        assert!(matches!(fs.read_config(), Err(ReadError::Serde(_))));
    }
}
