//! Configuration file loading.
//!
//! Both servers run fine with no config at all; a TOML file can pin the
//! ports, roots and page that a project uses so the subcommands stay
//! zero-argument. CLI flags always win over file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ServeError;

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG: &str = "devserve.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebSection,
    pub mock: MockSection,
}

/// `[web]` section: static web server overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebSection {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub root: Option<PathBuf>,
}

/// `[mock]` section: mock API server overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MockSection {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub root: Option<PathBuf>,
    pub page: Option<PathBuf>,
    pub open_browser: Option<bool>,
}

impl Config {
    /// Load from the default search locations: `./devserve.toml`, then
    /// `<config dir>/devserve/config.toml`. A missing file is not an
    /// error; a present but unparsable one is.
    pub fn load() -> Result<Self, ServeError> {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Self::load_from_path(&local);
        }

        if let Some(dir) = dirs::config_dir() {
            let user = dir.join("devserve").join("config.toml");
            if user.exists() {
                return Self::load_from_path(&user);
            }
        }

        Ok(Self::default())
    }

    /// Load from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self, ServeError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ServeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ServeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [web]
            port = 9087
            bind = "127.0.0.1"
            root = "dist"

            [mock]
            port = 9888
            page = "index.html"
            open_browser = false
            "#,
        )
        .unwrap();

        assert_eq!(config.web.port, Some(9087));
        assert_eq!(config.web.bind.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.web.root, Some(PathBuf::from("dist")));
        assert_eq!(config.mock.port, Some(9888));
        assert_eq!(config.mock.page, Some(PathBuf::from("index.html")));
        assert_eq!(config.mock.open_browser, Some(false));
    }

    #[test]
    fn test_partial_section_leaves_rest_unset() {
        let config: Config = toml::from_str("[mock]\nport = 9000\n").unwrap();
        assert_eq!(config.mock.port, Some(9000));
        assert!(config.mock.bind.is_none());
        assert_eq!(config.web, WebSection::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[web]\nport = 8000").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.web.port, Some(8000));
    }

    #[test]
    fn test_load_from_path_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ServeError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = Config::load_from_path(Path::new("/no/such/devserve.toml")).unwrap_err();
        assert!(matches!(err, ServeError::ConfigRead { .. }));
    }
}
