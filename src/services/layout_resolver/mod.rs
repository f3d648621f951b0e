//! Сервис LayoutResolver: ответственность и границы
//!
//! Модуль выбирает источник раскладки кнопок заголовка для текущего рабочего стола
//! (стандартные раскладки платформ, `gsettings` для GNOME и Pantheon, `kwinrc` для KDE)
//! и превращает его в [`WindowButtonLayout`].
//! Окружение процесса читается только через [`SystemContext`].
//!
//! [`WindowButtonLayout`]: crate::models::WindowButtonLayout
//! [`SystemContext`]: crate::services::system::SystemContext

mod desktop;
mod gsettings;
mod kwin;
mod resolver;

pub use self::desktop::DesktopEnvironment;
pub use self::gsettings::{parse_settings_output, SettingsKey, SettingsResolver};
pub use self::kwin::{parse_kwin_config, KdeResolver, KWIN_CONFIG_RELATIVE_PATH};
pub use self::resolver::{LayoutPlan, LayoutResolver};
