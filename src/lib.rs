//! Раскладка кнопок заголовка окна (закрыть, свернуть, развернуть, меню, разделитель)
//! для текущей платформы и среды рабочего стола.
//!
//! ```no_run
//! let layout = titlebar_layout::get_window_button_layout()?;
//! println!("{}", layout);
//! # Ok::<(), titlebar_layout::error::LayoutError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
mod utils;

pub use error::{LayoutError, ParseError, Result};
pub use models::{WindowButton, WindowButtonLayout};

use config::ResolverConfig;
use services::{LayoutResolver, RealSystem};

/// Раскладка для реального окружения процесса с настройками по умолчанию
pub fn get_window_button_layout() -> Result<WindowButtonLayout> {
    let system = RealSystem::new();
    let config = ResolverConfig::default();
    LayoutResolver::new(&system, &config).resolve()
}
