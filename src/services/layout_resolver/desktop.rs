use crate::services::system::SystemContext;
use std::fmt;
use tracing::debug;

pub const XDG_CURRENT_DESKTOP: &str = "XDG_CURRENT_DESKTOP";
pub const GDMSESSION: &str = "GDMSESSION";
pub const GSETTINGS_SCHEMA_DIR: &str = "GSETTINGS_SCHEMA_DIR";

/// Среда рабочего стола Linux, от которой зависит источник раскладки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopEnvironment {
    Kde,
    Pantheon,
    Gnome,
    Unknown,
}

impl DesktopEnvironment {
    /// Порядок проверок важен: KDE, затем Pantheon, затем GNOME.
    ///
    /// Сравнения регистрозависимые: `GDMSESSION=KDE` сессией KDE не считается.
    pub fn detect<S: SystemContext + ?Sized>(system: &S) -> Self {
        let current_desktop = system.env_var(XDG_CURRENT_DESKTOP);
        let session = system.env_var(GDMSESSION);
        debug!(
            "{}={:?}, {}={:?}",
            XDG_CURRENT_DESKTOP, current_desktop, GDMSESSION, session
        );

        if current_desktop.as_deref() == Some("KDE")
            || session.as_deref().is_some_and(|s| s.starts_with("kde"))
        {
            return DesktopEnvironment::Kde;
        }

        if session.as_deref() == Some("pantheon") {
            return DesktopEnvironment::Pantheon;
        }

        // Любое непустое значение, само содержимое не важно
        if system
            .env_var(GSETTINGS_SCHEMA_DIR)
            .is_some_and(|dir| !dir.is_empty())
        {
            return DesktopEnvironment::Gnome;
        }

        DesktopEnvironment::Unknown
    }
}

impl fmt::Display for DesktopEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DesktopEnvironment::Kde => "KDE",
            DesktopEnvironment::Pantheon => "Pantheon",
            DesktopEnvironment::Gnome => "GNOME",
            DesktopEnvironment::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::system::fake_system::FakeSystem;

    #[test]
    fn test_no_signals_is_unknown() {
        assert_eq!(
            DesktopEnvironment::detect(&FakeSystem::linux()),
            DesktopEnvironment::Unknown
        );
    }

    #[test]
    fn test_kde_signals() {
        let by_desktop = FakeSystem::linux().with_env(XDG_CURRENT_DESKTOP, "KDE");
        assert_eq!(DesktopEnvironment::detect(&by_desktop), DesktopEnvironment::Kde);

        let by_session = FakeSystem::linux().with_env(GDMSESSION, "kde-plasma");
        assert_eq!(DesktopEnvironment::detect(&by_session), DesktopEnvironment::Kde);

        // Регистр имеет значение
        let upper_session = FakeSystem::linux().with_env(GDMSESSION, "KDE-plasma");
        assert_eq!(
            DesktopEnvironment::detect(&upper_session),
            DesktopEnvironment::Unknown
        );

        let lower_desktop = FakeSystem::linux().with_env(XDG_CURRENT_DESKTOP, "kde");
        assert_eq!(
            DesktopEnvironment::detect(&lower_desktop),
            DesktopEnvironment::Unknown
        );
    }

    #[test]
    fn test_precedence() {
        let system = FakeSystem::linux()
            .with_env(XDG_CURRENT_DESKTOP, "KDE")
            .with_env(GDMSESSION, "pantheon")
            .with_env(GSETTINGS_SCHEMA_DIR, "/usr/share/glib-2.0/schemas");
        assert_eq!(DesktopEnvironment::detect(&system), DesktopEnvironment::Kde);

        let system = FakeSystem::linux()
            .with_env(GDMSESSION, "pantheon")
            .with_env(GSETTINGS_SCHEMA_DIR, "/usr/share/glib-2.0/schemas");
        assert_eq!(DesktopEnvironment::detect(&system), DesktopEnvironment::Pantheon);
    }

    #[test]
    fn test_gnome_requires_non_empty_schema_dir() {
        let empty = FakeSystem::linux().with_env(GSETTINGS_SCHEMA_DIR, "");
        assert_eq!(DesktopEnvironment::detect(&empty), DesktopEnvironment::Unknown);

        let set = FakeSystem::linux().with_env(GSETTINGS_SCHEMA_DIR, "/tmp/schemas");
        assert_eq!(DesktopEnvironment::detect(&set), DesktopEnvironment::Gnome);
    }
}
