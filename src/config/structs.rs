use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShortmapError};

/// 默认配置文件路径（不存在时忽略）
pub const DEFAULT_CONFIG_PATH: &str = "shortmap.toml";

/// 环境变量前缀，示例：SM__LOGGING__LEVEL=debug
pub const ENV_PREFIX: &str = "SM";

/// How the log replay treats a line without a space separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Abort the load with `MalformedRecord`.
    #[default]
    Strict,
    /// Log a warning and continue with the next line.
    Skip,
}

impl std::fmt::Display for RecordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for RecordPolicy {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "skip" => Ok(Self::Skip),
            _ => Err(format!(
                "Invalid record policy: '{}'. Valid: strict, skip",
                s
            )),
        }
    }
}

/// 静态配置（从 TOML 和环境变量加载，启动时使用）
///
/// - store: 映射日志配置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StaticConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    ///
    /// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_PATH`]
    /// is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let file_source = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the program cannot act on.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ShortmapError::configuration(format!(
                "Invalid logging.format: '{}'. Valid: text, json",
                self.logging.format
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ShortmapError::configuration("logging.level is empty"));
        }
        if self
            .store
            .log_file
            .as_ref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(ShortmapError::configuration("store.log_file is empty"));
        }
        Ok(())
    }

    /// 生成 TOML 配置文本
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self)
            .unwrap_or_else(|e| format!("# Error generating config: {}", e))
    }
}

/// 映射存储配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub record_policy: RecordPolicy,
    #[serde(default)]
    pub sync_on_write: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

// ============================================================
// Default implementations
// ============================================================

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            record_policy: RecordPolicy::default(),
            sync_on_write: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}
