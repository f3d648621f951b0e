use super::WindowButton;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Раскладка кнопок заголовка: группа в начале и группа в конце.
///
/// Порядок внутри группы соответствует порядку отрисовки слева направо.
/// Дубликаты не отсеиваются, если они есть в исходных данных.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowButtonLayout {
    pub start: Vec<WindowButton>,
    pub end: Vec<WindowButton>,
}

impl WindowButtonLayout {
    pub fn new(start: Vec<WindowButton>, end: Vec<WindowButton>) -> Self {
        Self { start, end }
    }

    /// Раскладка Windows: меню слева, свернуть/развернуть/закрыть справа
    pub fn windows() -> Self {
        Self::new(
            vec![WindowButton::Menu],
            vec![
                WindowButton::Minimize,
                WindowButton::Maximize,
                WindowButton::Close,
            ],
        )
    }

    /// Раскладка macOS: "светофор" слева, меню справа
    pub fn macos() -> Self {
        Self::new(
            vec![
                WindowButton::Close,
                WindowButton::Minimize,
                WindowButton::Maximize,
            ],
            vec![WindowButton::Menu],
        )
    }

    /// Раскладка по умолчанию для нераспознанных сред
    pub fn fallback() -> Self {
        Self::windows()
    }
}

fn join_buttons(buttons: &[WindowButton]) -> String {
    buttons
        .iter()
        .map(WindowButton::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Нотация gsettings: `menu:minimize,maximize,close`
impl fmt::Display for WindowButtonLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", join_buttons(&self.start), join_buttons(&self.end))
    }
}
