use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://lean_seed.db?mode=rwc";
pub const DEFAULT_LADDER_LEVELS: usize = 5;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    pub sqlx_logging: bool,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            idle_timeout: Some(Duration::from_secs(8)),
            max_lifetime: Some(Duration::from_secs(60)),
            sqlx_logging: true,
        }
    }

    /// 单连接内存库：连接关闭即数据丢失，所以不设置 idle/lifetime
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            idle_timeout: None,
            max_lifetime: None,
            sqlx_logging: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub store: StoreConfig,
    pub run_timeout: Duration,
    pub ladder_levels: usize,
    pub catalog_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = non_empty(&lookup, "DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let mut store = StoreConfig::new(database_url);
        store.max_connections = parse_or(&lookup, "SEED_MAX_CONNECTIONS", store.max_connections)?;
        if store.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "SEED_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        store.min_connections = store.min_connections.min(store.max_connections);

        let timeout_secs: u64 = parse_or(&lookup, "SEED_TIMEOUT_SECS", 120)?;
        let ladder_levels: usize = parse_or(&lookup, "SEED_LADDER_LEVELS", DEFAULT_LADDER_LEVELS)?;
        if ladder_levels == 0 {
            return Err(ConfigError::Invalid {
                key: "SEED_LADDER_LEVELS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            store,
            run_timeout: Duration::from_secs(timeout_secs),
            ladder_levels,
            catalog_path: non_empty(&lookup, "SEED_CATALOG_PATH").map(PathBuf::from),
            log_dir: non_empty(&lookup, "SEED_LOG_DIR").map(PathBuf::from),
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = SeedConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.store.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.ladder_levels, 5);
        assert_eq!(cfg.run_timeout, Duration::from_secs(120));
        assert!(cfg.catalog_path.is_none());
        assert!(cfg.log_dir.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = SeedConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("SEED_TIMEOUT_SECS", "30"),
            ("SEED_LADDER_LEVELS", "4"),
            ("SEED_MAX_CONNECTIONS", "1"),
            ("SEED_CATALOG_PATH", "fixtures/catalog.json"),
            ("SEED_LOG_DIR", "  "),
        ]))
        .unwrap();
        assert_eq!(cfg.store.database_url, "sqlite://other.db");
        assert_eq!(cfg.run_timeout, Duration::from_secs(30));
        assert_eq!(cfg.ladder_levels, 4);
        assert_eq!(cfg.store.max_connections, 1);
        assert_eq!(cfg.store.min_connections, 1);
        assert_eq!(
            cfg.catalog_path,
            Some(PathBuf::from("fixtures/catalog.json"))
        );
        assert!(cfg.log_dir.is_none());
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = SeedConfig::from_lookup(lookup_from(&[("SEED_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "SEED_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
        assert!(SeedConfig::from_lookup(lookup_from(&[("SEED_LADDER_LEVELS", "0")])).is_err());
    }
}
