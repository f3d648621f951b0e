use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Префикс переменных окружения, переопределяющих конфигурацию
pub const ENV_PREFIX: &str = "TITLEBAR_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub resolver: ResolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Команда запроса настроек GNOME/Pantheon
    pub settings_command: String,
    /// Явный путь к kwinrc; по умолчанию `~/.config/kwinrc`
    #[serde(default)]
    pub kwin_config: Option<PathBuf>,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

/// Что делать, если внешний источник раскладки недоступен или повреждён.
///
/// Отсутствие kwinrc ошибкой не считается и всегда даёт раскладку по умолчанию.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    #[default]
    Propagate,
    Fallback,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            settings_command: "gsettings".to_string(),
            kwin_config: None,
            on_error: ErrorPolicy::Propagate,
        }
    }
}

impl Config {
    /// Значения по умолчанию, затем TOML-файл (если есть), затем `TITLEBAR_*`
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        if self.resolver.settings_command.trim().is_empty() {
            anyhow::bail!("settings_command не может быть пустым");
        }

        if let Some(path) = &self.resolver.kwin_config {
            if path.as_os_str().is_empty() {
                anyhow::bail!("kwin_config задан пустым путём");
            }
        }

        Ok(())
    }
}
