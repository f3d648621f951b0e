use super::{Platform, SystemContext};
use crate::error::{LayoutError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Подменное окружение для тестов резолвера
pub struct FakeSystem {
    platform: Platform,
    env: HashMap<String, String>,
    home: Option<PathBuf>,
    files: HashMap<PathBuf, String>,
    commands: HashMap<String, std::result::Result<String, String>>,
    pub invoked: RefCell<Vec<String>>,
    pub read_paths: RefCell<Vec<PathBuf>>,
}

impl FakeSystem {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            env: HashMap::new(),
            home: Some(PathBuf::from("/home/tester")),
            files: HashMap::new(),
            commands: HashMap::new(),
            invoked: RefCell::new(Vec::new()),
            read_paths: RefCell::new(Vec::new()),
        }
    }

    pub fn linux() -> Self {
        Self::new(Platform::Linux)
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Вывод команды; ключ — полная командная строка через пробел
    pub fn with_command_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.commands
            .insert(command_line.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn with_command_failure(mut self, command_line: &str, stderr: &str) -> Self {
        self.commands
            .insert(command_line.to_string(), Err(stderr.to_string()));
        self
    }
}

impl SystemContext for FakeSystem {
    fn platform(&self) -> Platform {
        self.platform.clone()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn read_file(&self, path: &Path) -> Result<Option<String>> {
        self.read_paths.borrow_mut().push(path.to_path_buf());
        Ok(self.files.get(path).cloned())
    }

    fn run_command(&self, program: &str, args: &[&str]) -> Result<String> {
        let mut parts = vec![program];
        parts.extend_from_slice(args);
        let command_line = parts.join(" ");
        self.invoked.borrow_mut().push(command_line.clone());

        match self.commands.get(&command_line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => LayoutError::command_failed(stderr.clone()),
            None => LayoutError::command_failed(format!("{} не найден", program)),
        }
    }
}
