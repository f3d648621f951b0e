use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка разбора раскладки: {0}")]
    Parse(#[from] ParseError),

    #[error("Внешняя команда завершилась с ошибкой: {0}")]
    CommandFailed(String),

    #[error("Не удалось определить домашний каталог пользователя")]
    HomeDirNotFound,
}

impl LayoutError {
    pub fn command_failed<T>(msg: impl Into<String>) -> Result<T> {
        Err(LayoutError::CommandFailed(msg.into()))
    }
}

/// Ошибка разбора внешнего представления раскладки (вывод gsettings, kwinrc)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ParseError {
    pub reason: String,
}

impl ParseError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

#[macro_export]
macro_rules! layout_error {
    (command_failed, $($arg:tt)*) => {
        $crate::error::LayoutError::CommandFailed(format!($($arg)*))
    };
}
