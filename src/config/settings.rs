use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Имя необязательного файла настроек в рабочей директории
pub const SETTINGS_FILE: &str = "switchreport.yaml";

/// Базовые настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Таймаут для SNMP операций (секунды)
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings { timeout: 10 },
        }
    }
}

impl Settings {
    /// Загружает настройки из YAML файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Не удалось прочитать файл: {}", path.display()))?;

        let settings: Settings =
            serde_yml::from_str(&content).context("Не удалось распарсить YAML")?;

        Ok(settings)
    }

    /// Файл настроек необязателен: без него или с битым содержимым
    /// работают значения по умолчанию
    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("ERROR: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(Settings::default().connection.timeout, 10);
    }

    #[test]
    fn loads_timeout_from_yaml_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "connection:\n  timeout: 4").expect("write");

        let settings = Settings::load(&path).expect("load");
        assert_eq!(settings.connection.timeout, 4);
    }

    #[test]
    fn missing_file_is_an_error_for_load() {
        assert!(Settings::load("no-such-settings.yaml").is_err());
    }
}
