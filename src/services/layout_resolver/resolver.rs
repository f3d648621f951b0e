use super::desktop::DesktopEnvironment;
use super::gsettings::{SettingsKey, SettingsResolver};
use super::kwin::{KdeResolver, KWIN_CONFIG_RELATIVE_PATH};
use crate::config::{ErrorPolicy, ResolverConfig};
use crate::error::{LayoutError, Result};
use crate::models::WindowButtonLayout;
use crate::services::system::{Platform, SystemContext};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Источник раскладки, выбранный для текущего окружения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutPlan {
    WindowsDefault,
    MacosDefault,
    Kwin(PathBuf),
    Settings(SettingsKey),
    Fallback,
}

impl fmt::Display for LayoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutPlan::WindowsDefault => write!(f, "стандартная раскладка Windows"),
            LayoutPlan::MacosDefault => write!(f, "стандартная раскладка macOS"),
            LayoutPlan::Kwin(path) => write!(f, "kwinrc: {}", path.display()),
            LayoutPlan::Settings(key) => write!(f, "gsettings: {}", key),
            LayoutPlan::Fallback => write!(f, "раскладка по умолчанию"),
        }
    }
}

pub struct LayoutResolver<'a, S: SystemContext + ?Sized> {
    system: &'a S,
    config: &'a ResolverConfig,
}

impl<'a, S: SystemContext + ?Sized> LayoutResolver<'a, S> {
    pub fn new(system: &'a S, config: &'a ResolverConfig) -> Self {
        Self { system, config }
    }

    /// Выбор источника без запуска команд и чтения файлов
    pub fn plan(&self) -> Result<LayoutPlan> {
        let platform = self.system.platform();
        debug!("Платформа: {}", platform);

        let plan = match platform {
            Platform::Windows => LayoutPlan::WindowsDefault,
            Platform::MacOs => LayoutPlan::MacosDefault,
            Platform::Linux => {
                let desktop = DesktopEnvironment::detect(self.system);
                info!("Обнаружена среда рабочего стола: {}", desktop);

                match desktop {
                    DesktopEnvironment::Kde => LayoutPlan::Kwin(self.kwin_config_path()?),
                    DesktopEnvironment::Pantheon => LayoutPlan::Settings(SettingsKey::PANTHEON),
                    DesktopEnvironment::Gnome => LayoutPlan::Settings(SettingsKey::GNOME),
                    DesktopEnvironment::Unknown => LayoutPlan::Fallback,
                }
            }
            Platform::Other(_) => LayoutPlan::Fallback,
        };

        debug!("Источник раскладки: {}", plan);
        Ok(plan)
    }

    /// Получить раскладку из выбранного источника
    pub fn execute(&self, plan: &LayoutPlan) -> Result<WindowButtonLayout> {
        match plan {
            LayoutPlan::WindowsDefault => Ok(WindowButtonLayout::windows()),
            LayoutPlan::MacosDefault => Ok(WindowButtonLayout::macos()),
            LayoutPlan::Kwin(path) => {
                KdeResolver::new(self.system, path.clone()).resolve_from_kwin_config()
            }
            LayoutPlan::Settings(key) => {
                SettingsResolver::new(self.system, &self.config.settings_command)
                    .resolve_from_settings_key(key)
            }
            LayoutPlan::Fallback => Ok(WindowButtonLayout::fallback()),
        }
    }

    /// Раскладка кнопок для текущего окружения.
    ///
    /// При `on_error = "fallback"` любая ошибка заменяется раскладкой по умолчанию.
    pub fn resolve(&self) -> Result<WindowButtonLayout> {
        let result = self.plan().and_then(|plan| self.execute(&plan));

        match (result, self.config.on_error) {
            (Ok(layout), _) => Ok(layout),
            (Err(e), ErrorPolicy::Propagate) => Err(e),
            (Err(e), ErrorPolicy::Fallback) => {
                warn!("Не удалось определить раскладку ({}), используется раскладка по умолчанию", e);
                Ok(WindowButtonLayout::fallback())
            }
        }
    }

    fn kwin_config_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.config.kwin_config {
            return Ok(path.clone());
        }

        self.system
            .home_dir()
            .map(|home| home.join(KWIN_CONFIG_RELATIVE_PATH))
            .ok_or(LayoutError::HomeDirNotFound)
    }
}
