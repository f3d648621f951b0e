use crate::error::{ParseError, Result};
use crate::models::{WindowButton, WindowButtonLayout};
use crate::services::system::SystemContext;
use crate::trace_if_enabled;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, info};

/// Расположение kwinrc относительно домашнего каталога
pub const KWIN_CONFIG_RELATIVE_PATH: &str = ".config/kwinrc";

static BUTTONS_ON_LEFT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*ButtonsOnLeft=(.*)$").expect("регулярное выражение kwinrc"));
static BUTTONS_ON_RIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*ButtonsOnRight=(.*)$").expect("регулярное выражение kwinrc"));

/// Разбор kwinrc: `ButtonsOnLeft=MS` и `ButtonsOnRight=HIAX` в любом порядке.
///
/// Коды без соответствия (разделитель, "поверх всех", справка и т.п.) отбрасываются.
pub fn parse_kwin_config(content: &str) -> std::result::Result<WindowButtonLayout, ParseError> {
    let start = extract_field(&BUTTONS_ON_LEFT, "ButtonsOnLeft", content)?;
    let end = extract_field(&BUTTONS_ON_RIGHT, "ButtonsOnRight", content)?;

    Ok(WindowButtonLayout::new(
        map_kwin_codes(start),
        map_kwin_codes(end),
    ))
}

fn extract_field<'c>(
    pattern: &Regex,
    name: &str,
    content: &'c str,
) -> std::result::Result<&'c str, ParseError> {
    pattern
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
        .ok_or_else(|| ParseError::new(format!("в kwinrc нет поля {}", name)))
}

fn map_kwin_codes(codes: &str) -> Vec<WindowButton> {
    codes
        .chars()
        .filter_map(|code| {
            let button = WindowButton::from_kwin_code(code);
            if button.is_none() {
                trace_if_enabled!("Пропущен код kwin: {:?}", code);
            }
            button
        })
        .collect()
}

/// Раскладка KDE из kwinrc
pub struct KdeResolver<'a, S: SystemContext + ?Sized> {
    system: &'a S,
    path: PathBuf,
}

impl<'a, S: SystemContext + ?Sized> KdeResolver<'a, S> {
    pub fn new(system: &'a S, path: impl Into<PathBuf>) -> Self {
        Self {
            system,
            path: path.into(),
        }
    }

    /// Отсутствующий файл даёт раскладку по умолчанию, повреждённый файл — ошибку
    pub fn resolve_from_kwin_config(&self) -> Result<WindowButtonLayout> {
        let Some(content) = self.system.read_file(&self.path)? else {
            info!(
                "{:?} не найден, используется раскладка по умолчанию",
                self.path
            );
            return Ok(WindowButtonLayout::fallback());
        };

        let layout = parse_kwin_config(&content)?;
        debug!("{:?} -> {}", self.path, layout);
        Ok(layout)
    }
}
