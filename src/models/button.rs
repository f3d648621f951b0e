use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Кнопка заголовка окна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowButton {
    Close,
    Maximize,
    Minimize,
    Spacer,
    Menu,
}

impl WindowButton {
    pub const ALL: [WindowButton; 5] = [
        WindowButton::Close,
        WindowButton::Maximize,
        WindowButton::Minimize,
        WindowButton::Spacer,
        WindowButton::Menu,
    ];

    /// Строковый литерал кнопки в нотации gsettings
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowButton::Close => "close",
            WindowButton::Maximize => "maximize",
            WindowButton::Minimize => "minimize",
            WindowButton::Spacer => "spacer",
            WindowButton::Menu => "menu",
        }
    }

    /// Точное (регистрозависимое) сопоставление токена; неизвестный токен даёт `None`
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.as_str() == token)
    }

    /// Односимвольные коды из `ButtonsOnLeft`/`ButtonsOnRight` в kwinrc.
    ///
    /// Коды разделителя KWin (`S`, `_`) сюда не входят и отбрасываются.
    pub fn from_kwin_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(WindowButton::Menu),
            'I' => Some(WindowButton::Minimize),
            'A' => Some(WindowButton::Maximize),
            'X' => Some(WindowButton::Close),
            _ => None,
        }
    }
}

impl FromStr for WindowButton {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseError::new(format!("неизвестная кнопка '{}'", s)))
    }
}

impl fmt::Display for WindowButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
