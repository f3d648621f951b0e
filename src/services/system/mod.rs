//! Доступ к окружению процесса: платформа, переменные окружения, файлы и внешние команды.
//!
//! Резолвер раскладки читает окружение только через [`SystemContext`], поэтому
//! в тестах реальная ОС подменяется на `FakeSystem`.

mod platform;
mod real_system;
mod r#trait;

#[cfg(test)]
pub mod fake_system;

pub use self::platform::Platform;
pub use self::r#trait::SystemContext;
pub use self::real_system::RealSystem;
