//! Process configuration.
//!
//! `AppConfig` is built once in `main.rs` and then passed into the
//! application state; nothing else reads the environment. Tests build it from
//! a closure through [`AppConfig::from_lookup`].
//!
//! | variable            | required | default                        |
//! |---------------------|----------|--------------------------------|
//! | `MORPH_PUBLIC_KEY`  | yes      |                                |
//! | `MORPH_SECRET_KEY`  | yes      |                                |
//! | `MORPH_API_URL`     | no       | `https://api.runmorph.dev/v0`  |
//! | `MORPH_CONNECT_URL` | no       | `https://connect.runmorph.dev` |
//! | `MORPH_OWNER_ID`    | no       | `demo`                         |
//! | `HOST`              | no       | `127.0.0.1`                    |
//! | `PORT`              | no       | `8080`                         |
//! | `OPEN_BROWSER`      | no       | `true`                         |

use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.runmorph.dev/v0";
const DEFAULT_CONNECT_URL: &str = "https://connect.runmorph.dev";
const DEFAULT_OWNER_ID: &str = "demo";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct AppConfig {
    pub public_key: String,
    pub secret_key: String,
    /// Base URL of the hosted Morph API, without trailing slash.
    pub api_url: String,
    /// Hosted page that completes a connection for a session token.
    pub connect_url: String,
    /// Owner every demo session is created for.
    pub owner_id: String,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let open_browser = match get("OPEN_BROWSER").as_deref() {
            None | Some("1") | Some("true") => true,
            Some("0") | Some("false") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "OPEN_BROWSER",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            public_key: required("MORPH_PUBLIC_KEY")?,
            secret_key: required("MORPH_SECRET_KEY")?,
            api_url: get("MORPH_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            connect_url: get("MORPH_CONNECT_URL")
                .unwrap_or_else(|| DEFAULT_CONNECT_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            owner_id: get("MORPH_OWNER_ID").unwrap_or_else(|| DEFAULT_OWNER_ID.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
        })
    }

    pub fn local_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> AppConfig {
    AppConfig::from_lookup(|name| match name {
        "MORPH_PUBLIC_KEY" => Some("pk_test".to_string()),
        "MORPH_SECRET_KEY" => Some("sk_test".to_string()),
        "OPEN_BROWSER" => Some("false".to_string()),
        _ => None,
    })
    .expect("test config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn keys_are_required() {
        let err = AppConfig::from_lookup(lookup(&[("MORPH_SECRET_KEY", "sk")])).err();
        assert_eq!(err, Some(ConfigError::Missing("MORPH_PUBLIC_KEY")));

        let err = AppConfig::from_lookup(lookup(&[("MORPH_PUBLIC_KEY", "pk"), ("MORPH_SECRET_KEY", "  ")])).err();
        assert_eq!(err, Some(ConfigError::Missing("MORPH_SECRET_KEY")));
    }

    #[test]
    fn defaults_apply() {
        let config =
            AppConfig::from_lookup(lookup(&[("MORPH_PUBLIC_KEY", "pk"), ("MORPH_SECRET_KEY", "sk")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.owner_id, "demo");
        assert_eq!(config.local_url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("MORPH_PUBLIC_KEY", "pk"),
            ("MORPH_SECRET_KEY", "sk"),
            ("PORT", "eighty"),
        ]))
        .err();
        assert_eq!(
            err,
            Some(ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            })
        );
    }

    #[test]
    fn api_url_trailing_slash_is_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MORPH_PUBLIC_KEY", "pk"),
            ("MORPH_SECRET_KEY", "sk"),
            ("MORPH_API_URL", "http://localhost:4000/v0/"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:4000/v0");
    }
}
