//! Client configuration and credential resolution.
//!
//! Credentials are resolved once, at the application boundary, and injected into
//! [`ClientConfig`]. Each variable is looked up independently in this order:
//!
//! 1. explicit value
//! 2. environment variable
//! 3. process option (`KEY=VALUE`, e.g. from `--define`)
//! 4. resource file (TOML, optional)
//!
//! Empty strings are treated as absent.

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ConfigError;
use crate::http_client::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

pub const DEFAULT_BASE_URL: &str = "https://api.bitfinex.com/";
pub const DEFAULT_RESOURCE_FILE: &str = "bitfinex.toml";
pub const API_KEY_VAR: &str = "BITFINEX_API_KEY";
pub const SECRET_KEY_VAR: &str = "BITFINEX_SECRET_KEY";

/// API key pair. Only needed by authenticated endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::MissingVariable { name: API_KEY_VAR });
        }
        if secret_key.is_empty() {
            return Err(ConfigError::MissingVariable {
                name: SECRET_KEY_VAR,
            });
        }

        Ok(Self {
            api_key,
            secret_key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("secret_key", &"***")
            .finish()
    }
}

/// Keeps the last four characters visible.
pub fn mask(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail = value.chars().skip(count - 4).collect::<String>();
    format!("{}{tail}", "*".repeat(count - 4))
}

/// Where a resolved variable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialOrigin {
    Explicit,
    Environment,
    ProcessOption,
    ResourceFile,
}

impl Display for CredentialOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Explicit => "explicit",
            Self::Environment => "environment",
            Self::ProcessOption => "process_option",
            Self::ResourceFile => "resource_file",
        };
        f.write_str(label)
    }
}

/// A single resolved variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: String,
    pub origin: CredentialOrigin,
}

/// Outcome of credential resolution; either variable may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub api_key: Option<ResolvedValue>,
    pub secret_key: Option<ResolvedValue>,
}

impl ResolvedCredentials {
    /// Both values, or the first missing variable.
    pub fn require(&self) -> Result<Credentials, ConfigError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ConfigError::MissingVariable { name: API_KEY_VAR })?;
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(ConfigError::MissingVariable {
                name: SECRET_KEY_VAR,
            })?;
        Credentials::new(api_key.value.clone(), secret_key.value.clone())
    }

    /// Credentials when both variables resolved, `None` otherwise.
    pub fn into_credentials(self) -> Option<Credentials> {
        self.require().ok()
    }
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Layered lookup of `BITFINEX_API_KEY` / `BITFINEX_SECRET_KEY`.
pub struct CredentialResolver {
    explicit: BTreeMap<String, String>,
    env: EnvLookup,
    options: BTreeMap<String, String>,
    resource_file: Option<PathBuf>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self {
            explicit: BTreeMap::new(),
            env: Box::new(|_| None),
            options: BTreeMap::new(),
            resource_file: None,
        }
    }
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver reading the real process environment and `./bitfinex.toml`.
    pub fn from_process_env() -> Self {
        Self::new()
            .with_env(|name| std::env::var(name).ok())
            .with_resource_file(DEFAULT_RESOURCE_FILE)
    }

    pub fn with_explicit(mut self, name: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.explicit.insert(name.to_owned(), value);
        }
        self
    }

    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Add a `KEY=VALUE` process option.
    pub fn with_define(self, define: &str) -> Result<Self, ConfigError> {
        let (name, value) = parse_define(define)?;
        Ok(self.with_option(name, value))
    }

    pub fn with_resource_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.resource_file = Some(path.into());
        self
    }

    pub fn resolve(&self) -> Result<ResolvedCredentials, ConfigError> {
        let file = match &self.resource_file {
            Some(path) => load_resource_file(path)?,
            None => BTreeMap::new(),
        };

        Ok(ResolvedCredentials {
            api_key: self.lookup(API_KEY_VAR, &file),
            secret_key: self.lookup(SECRET_KEY_VAR, &file),
        })
    }

    fn lookup(&self, name: &str, file: &BTreeMap<String, String>) -> Option<ResolvedValue> {
        let candidates = [
            (self.explicit.get(name).cloned(), CredentialOrigin::Explicit),
            ((self.env)(name), CredentialOrigin::Environment),
            (self.options.get(name).cloned(), CredentialOrigin::ProcessOption),
            (file.get(name).cloned(), CredentialOrigin::ResourceFile),
        ];

        candidates.into_iter().find_map(|(value, origin)| {
            value
                .filter(|value| !value.is_empty())
                .map(|value| ResolvedValue { value, origin })
        })
    }
}

fn parse_define(define: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidDefine {
        value: define.to_owned(),
    };
    let (name, value) = define.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok((name.to_owned(), value.to_owned()))
}

/// Reads top-level string keys of a TOML file. A missing file yields no values.
fn load_resource_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let to_error = |message: String| ConfigError::ResourceFile {
        path: path.display().to_string(),
        message,
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no credential resource file");
            return Ok(BTreeMap::new());
        }
        Err(error) => return Err(to_error(error.to_string())),
    };

    let table = contents
        .parse::<toml::Table>()
        .map_err(|error| to_error(error.to_string()))?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(value) => Some((key, value)),
            _ => None,
        })
        .collect())
}

/// Connection settings for [`crate::MarketClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub credentials: Option<Credentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
            credentials: None,
        }
    }
}

impl ClientConfig {
    /// Base URL is normalized to end with `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn process_env_resolver_reads_real_environment_and_default_file() {
        let resolver = CredentialResolver::from_process_env();

        assert_eq!(
            resolver.resource_file.as_deref(),
            Some(Path::new(DEFAULT_RESOURCE_FILE))
        );
        assert_eq!((resolver.env)("PATH"), std::env::var("PATH").ok());
        assert_eq!(
            (resolver.env)("BITFINEX_TEST_SURELY_UNSET_VARIABLE"),
            None
        );
    }

    #[test]
    fn explicit_values_beat_environment() {
        let resolved = CredentialResolver::new()
            .with_explicit(API_KEY_VAR, Some(String::from("explicit-key")))
            .with_env(env_with(&[
                (API_KEY_VAR, "env-key"),
                (SECRET_KEY_VAR, "env-secret"),
            ]))
            .resolve()
            .expect("resolves");

        let api_key = resolved.api_key.expect("api key");
        assert_eq!(api_key.value, "explicit-key");
        assert_eq!(api_key.origin, CredentialOrigin::Explicit);

        let secret = resolved.secret_key.expect("secret key");
        assert_eq!(secret.origin, CredentialOrigin::Environment);
    }

    #[test]
    fn environment_beats_process_options() {
        let resolved = CredentialResolver::new()
            .with_env(env_with(&[(API_KEY_VAR, "env-key")]))
            .with_option(API_KEY_VAR, "option-key")
            .with_option(SECRET_KEY_VAR, "option-secret")
            .resolve()
            .expect("resolves");

        assert_eq!(
            resolved.api_key.map(|v| v.origin),
            Some(CredentialOrigin::Environment)
        );
        assert_eq!(
            resolved.secret_key.map(|v| v.origin),
            Some(CredentialOrigin::ProcessOption)
        );
    }

    #[test]
    fn empty_values_fall_through() {
        let resolved = CredentialResolver::new()
            .with_explicit(API_KEY_VAR, Some(String::new()))
            .with_env(env_with(&[(API_KEY_VAR, "")]))
            .with_option(API_KEY_VAR, "option-key")
            .resolve()
            .expect("resolves");

        assert_eq!(
            resolved.api_key.map(|v| v.value),
            Some(String::from("option-key"))
        );
    }

    #[test]
    fn require_reports_first_missing_variable() {
        let resolved = CredentialResolver::new()
            .with_option(API_KEY_VAR, "key")
            .resolve()
            .expect("resolves");

        assert_eq!(
            resolved.require(),
            Err(ConfigError::MissingVariable {
                name: SECRET_KEY_VAR
            })
        );
        assert!(resolved.into_credentials().is_none());
    }

    #[test]
    fn define_requires_key_and_equals_sign() {
        assert!(CredentialResolver::new()
            .with_define("BITFINEX_API_KEY=abc=def")
            .is_ok());
        assert!(matches!(
            CredentialResolver::new().with_define("BITFINEX_API_KEY"),
            Err(ConfigError::InvalidDefine { .. })
        ));
        assert!(matches!(
            CredentialResolver::new().with_define("=value"),
            Err(ConfigError::InvalidDefine { .. })
        ));
    }

    #[test]
    fn debug_output_masks_secrets() {
        let credentials = Credentials::new("abcdefgh", "top-secret").expect("valid");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("****efgh"));
        assert!(!rendered.contains("top-secret"));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080");
        assert_eq!(config.endpoint("v1/symbols"), "http://localhost:8080/v1/symbols");
        assert_eq!(
            ClientConfig::default().endpoint("v1/symbols_details"),
            "https://api.bitfinex.com/v1/symbols_details"
        );
    }
}
