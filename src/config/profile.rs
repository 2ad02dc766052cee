use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use zeroize_derive::{Zeroize, ZeroizeOnDrop};

use crate::config::ClientConfig;
use crate::types::error::S3cliError;
use crate::types::{AccessKeys, S3Credentials};

pub const CONFIG_FILE_NAME: &str = "s3cli.json";

const DEFAULT_FORCE_PATH_STYLE: bool = true;

/// One environment section of the config file.
///
/// ```json
/// {
///   "default": {
///     "region": "us-east-1",
///     "endpoint": "http://127.0.0.1:9000",
///     "access_key_id": "...",
///     "secret_key_id": "..."
///   }
/// }
/// ```
#[derive(Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct Profile {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_key_id: Option<String>,
    #[serde(default = "default_force_path_style")]
    #[zeroize(skip)]
    pub force_path_style: bool,
}

fn default_force_path_style() -> bool {
    DEFAULT_FORCE_PATH_STYLE
}

impl Debug for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let secret_key_id = self
            .secret_key_id
            .as_ref()
            .map_or("None", |_| "** redacted **");
        f.debug_struct("Profile")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("secret_key_id", &secret_key_id)
            .field("force_path_style", &self.force_path_style)
            .finish()
    }
}

impl Profile {
    pub fn to_client_config(&self) -> ClientConfig {
        let credential = match (self.access_key_id.as_ref(), self.secret_key_id.as_ref()) {
            (Some(access_key), Some(secret_access_key))
                if !access_key.is_empty() && !secret_access_key.is_empty() =>
            {
                S3Credentials::Credentials {
                    access_keys: AccessKeys {
                        access_key: access_key.to_string(),
                        secret_access_key: secret_access_key.to_string(),
                    },
                }
            }
            _ => S3Credentials::FromEnvironment,
        };

        ClientConfig {
            credential,
            region: self.region.clone().filter(|region| !region.is_empty()),
            endpoint_url: self.endpoint.clone().filter(|endpoint| !endpoint.is_empty()),
            force_path_style: self.force_path_style,
        }
    }
}

/// Returns `config_file` if given, otherwise the first `s3cli.json` found in
/// the home directory or the current directory.
pub fn find_config_file(config_file: Option<&Path>) -> Result<PathBuf, S3cliError> {
    if let Some(config_file) = config_file {
        return Ok(config_file.to_path_buf());
    }

    let mut search_dirs = Vec::new();
    if let Some(home_dir) = home_dir() {
        search_dirs.push(home_dir);
    }
    search_dirs.push(PathBuf::from("."));

    search_dirs
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            S3cliError::Config(format!(
                "{CONFIG_FILE_NAME} not found in the home directory or the current directory"
            ))
        })
}

pub fn load_profile(config_file: &Path, env: &str) -> Result<Profile, S3cliError> {
    let content = std::fs::read_to_string(config_file).map_err(|e| {
        S3cliError::Config(format!("failed to read {}: {e}", config_file.display()))
    })?;

    let mut profiles: HashMap<String, Profile> = serde_json::from_str(&content).map_err(|e| {
        S3cliError::Config(format!("failed to parse {}: {e}", config_file.display()))
    })?;

    let profile = profiles.remove(env).ok_or_else(|| {
        S3cliError::Config(format!(
            "env \"{env}\" not found in {}",
            config_file.display()
        ))
    })?;

    let path = config_file.display().to_string();
    debug!(config_file = path, env = env, "config file loaded.");

    Ok(profile)
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}
