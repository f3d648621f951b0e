use super::{Platform, SystemContext};
use crate::error::{LayoutError, Result};
use crate::layout_error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Реальное окружение процесса
#[derive(Debug, Default, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    pub fn new() -> Self {
        Self
    }
}

impl SystemContext for RealSystem {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn read_file(&self, path: &Path) -> Result<Option<String>> {
        // Невалидные байты UTF-8 заменяются, а не считаются ошибкой
        match fs::read(path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Файл {:?} не существует", path);
                Ok(None)
            }
            Err(e) => Err(LayoutError::Io(e)),
        }
    }

    fn run_command(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Запуск команды: {} {}", program, args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|e| {
            debug!("{} не найден или не запускается: {}", program, e);
            layout_error!(command_failed, "{} не найден: {}", program, e)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} вернул ошибку: {}", program, stderr);
            return LayoutError::command_failed(format!(
                "{} {} ({}): {}",
                program,
                args.join(" "),
                output.status,
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
