use crate::error::{ParseError, Result};
use crate::models::{WindowButton, WindowButtonLayout};
use crate::services::system::SystemContext;
use crate::trace_if_enabled;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::debug;

// Жадный захват: от первой до последней кавычки в строке
static QUOTED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(.*)'").expect("регулярное выражение gsettings"));

/// Схема и ключ настройки `button-layout`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsKey {
    pub schema: &'static str,
    pub key: &'static str,
}

impl SettingsKey {
    pub const GNOME: SettingsKey = SettingsKey {
        schema: "org.gnome.desktop.wm.preferences",
        key: "button-layout",
    };

    pub const PANTHEON: SettingsKey = SettingsKey {
        schema: "org.pantheon.desktop.gala.appearance",
        key: "button-layout",
    };
}

impl fmt::Display for SettingsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.schema, self.key)
    }
}

/// Разбор вывода `gsettings get`, например `'appmenu:minimize,maximize,close'`.
///
/// Токены, которые не являются известной кнопкой (`appmenu`, `icon`, пустые
/// между запятыми), отбрасываются.
pub fn parse_settings_output(output: &str) -> std::result::Result<WindowButtonLayout, ParseError> {
    let captures = QUOTED_VALUE.captures(output).ok_or_else(|| {
        ParseError::new(format!(
            "в выводе нет значения в одинарных кавычках: {:?}",
            output.trim()
        ))
    })?;
    let value = &captures[1];

    // Всё после второго ':' отбрасывается
    let mut segments = value.split(':');
    let start = segments.next().unwrap_or_default();
    let end = segments.next().ok_or_else(|| {
        ParseError::new(format!("в значении '{}' нет разделителя ':'", value))
    })?;

    Ok(WindowButtonLayout::new(
        filter_buttons(start),
        filter_buttons(end),
    ))
}

fn filter_buttons(segment: &str) -> Vec<WindowButton> {
    segment
        .split(',')
        .filter_map(|token| {
            let button = WindowButton::parse(token);
            if button.is_none() {
                trace_if_enabled!("Пропущен неизвестный токен gsettings: '{}'", token);
            }
            button
        })
        .collect()
}

/// Раскладка из настройки GNOME/Pantheon через внешнюю команду
pub struct SettingsResolver<'a, S: SystemContext + ?Sized> {
    system: &'a S,
    command: &'a str,
}

impl<'a, S: SystemContext + ?Sized> SettingsResolver<'a, S> {
    pub fn new(system: &'a S, command: &'a str) -> Self {
        Self { system, command }
    }

    /// Ошибки запуска команды и разбора вывода возвращаются как есть
    pub fn resolve_from_settings_key(&self, key: &SettingsKey) -> Result<WindowButtonLayout> {
        debug!("Запрашиваем {} через {}", key, self.command);

        let stdout = self
            .system
            .run_command(self.command, &["get", key.schema, key.key])?;
        let layout = parse_settings_output(&stdout)?;

        debug!("{} -> {}", key, layout);
        Ok(layout)
    }
}
