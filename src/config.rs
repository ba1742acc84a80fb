//! Where the record store lives

use crate::constants::store::{APP_DIR_NAME, DATA_FILE_ENV, DATA_FILE_NAME, LOCAL_DATA_DIR};
use std::path::PathBuf;

/// Runtime configuration of the node holder
#[derive(Debug, Clone, PartialEq)]
pub struct HolderConfig {
    /// Path of the JSON record document
    pub data_file: PathBuf,
}

impl HolderConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Resolve the data file from the environment.
    ///
    /// `NODE_HOLDER_DATA_FILE` wins; otherwise the file sits in a
    /// `node-holder` directory under the platform data dir, or under
    /// `./data` when the platform has none.
    pub fn from_env() -> Self {
        let override_path = std::env::var_os(DATA_FILE_ENV).filter(|v| !v.is_empty());
        Self::resolve(override_path.map(PathBuf::from), dirs::data_dir())
    }

    fn resolve(override_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        if let Some(path) = override_path {
            return Self::new(path);
        }
        let dir = match data_dir {
            Some(dir) => dir.join(APP_DIR_NAME),
            None => PathBuf::from(LOCAL_DATA_DIR),
        };
        Self::new(dir.join(DATA_FILE_NAME))
    }
}

impl Default for HolderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = HolderConfig::resolve(
            Some(PathBuf::from("/tmp/custom.json")),
            Some(PathBuf::from("/home/user/.local/share")),
        );
        assert_eq!(config.data_file, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_platform_data_dir() {
        let config = HolderConfig::resolve(None, Some(PathBuf::from("/home/user/.local/share")));
        assert_eq!(
            config.data_file,
            PathBuf::from("/home/user/.local/share/node-holder/global_list_data.json")
        );
    }

    #[test]
    fn test_local_fallback() {
        let config = HolderConfig::resolve(None, None);
        assert_eq!(config.data_file, PathBuf::from("data/global_list_data.json"));
    }
}
