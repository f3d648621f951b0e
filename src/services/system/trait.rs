use super::Platform;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Состояние процесса, от которого зависит резолвер раскладки
pub trait SystemContext {
    /// Платформа текущего процесса
    fn platform(&self) -> Platform;

    /// Значение переменной окружения; `None`, если она не задана или не в UTF-8
    fn env_var(&self, name: &str) -> Option<String>;

    /// Домашний каталог текущего пользователя
    fn home_dir(&self) -> Option<PathBuf>;

    /// Прочитать текстовый файл; `Ok(None)`, если файла нет
    fn read_file(&self, path: &Path) -> Result<Option<String>>;

    /// Синхронно выполнить команду и вернуть её stdout
    fn run_command(&self, program: &str, args: &[&str]) -> Result<String>;
}
