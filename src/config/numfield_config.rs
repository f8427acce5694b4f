// src/config/numfield_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use env_logger::Env;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumFieldConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Worker threads for the per-prime loop; `None` means one per CPU
    pub threads: Option<usize>,

    /// Ideal decomposition driver settings
    pub decomposition: DecompositionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Factor the reductions modulo different primes in parallel
    pub parallel: bool,

    /// Largest prime examined, whatever the Minkowski bound says
    pub prime_limit: Option<u64>,
}

impl Default for NumFieldConfig {
    fn default() -> Self {
        NumFieldConfig {
            log_level: "info".to_string(),
            threads: None,
            decomposition: DecompositionConfig::default(),
        }
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        DecompositionConfig {
            parallel: true,
            prime_limit: None,
        }
    }
}

impl NumFieldConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("numfield.toml").exists() {
            builder = builder.add_source(File::with_name("numfield.toml"));
        } else if Path::new("numfield.yaml").exists() {
            builder = builder.add_source(File::with_name("numfield.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }
        Self::finish(builder)
    }

    /// Thread count for the per-prime loop
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            Some(n) if n > 0 => n,
            _ => num_cpus::get(),
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("decomposition.parallel", true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // prefix NUMFIELD_, nested keys separated by a double underscore
        let builder = builder.add_source(
            Environment::with_prefix("NUMFIELD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}

/// Install the `env_logger` backend.
///
/// `NUMFIELD_LOG_LEVEL` and `NUMFIELD_LOG_STYLE` win over the configured
/// level. Calling this again once a logger is installed does nothing.
pub fn init_logging(config: &NumFieldConfig) {
    let env = Env::default()
        .filter_or("NUMFIELD_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("NUMFIELD_LOG_STYLE", "auto");

    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NumFieldConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.threads, None);
        assert!(config.decomposition.parallel);
        assert_eq!(config.decomposition.prime_limit, None);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = NumFieldConfig::load_from_file("does-not-exist.toml")
            .unwrap_or_else(|_| NumFieldConfig::default());
        assert!(config.decomposition.parallel);
    }

    #[test]
    fn test_effective_threads() {
        let mut config = NumFieldConfig::default();
        assert_eq!(config.effective_threads(), num_cpus::get());
        config.threads = Some(3);
        assert_eq!(config.effective_threads(), 3);
        config.threads = Some(0);
        assert_eq!(config.effective_threads(), num_cpus::get());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = NumFieldConfig::default();
        config.decomposition.prime_limit = Some(1000);
        let json = serde_json::to_string(&config).unwrap();
        let back: NumFieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_init_logging_twice() {
        let config = NumFieldConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}
