use std::env;

pub mod settings;

pub use settings::Settings;

/// Параметры опрашиваемого устройства, неизменны после валидации
#[derive(Debug, Clone)]
pub struct QueryTarget {
    pub address: String,
    pub community: String,
    pub port: i64,
    pub version: i64,
}

impl QueryTarget {
    /// Адрес сессии в форме host:port
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

/// Форма вывода отчета
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Console,
    Text,
    Html,
}

impl OutputMode {
    /// Разбор без учета регистра
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Some(OutputMode::Console),
            "text" => Some(OutputMode::Text),
            "html" => Some(OutputMode::Html),
            _ => None,
        }
    }
}

/// Собранная конфигурация запуска
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: QueryTarget,
    pub output: OutputMode,
    pub settings: Settings,
}

impl RunConfig {
    /// Таймаут SNMP операций: переменная окружения перекрывает настройки
    pub fn get_timeout(&self) -> u64 {
        env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(self.settings.connection.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_joins_host_and_port() {
        let target = QueryTarget {
            address: "10.0.0.1".to_string(),
            community: "public".to_string(),
            port: 161,
            version: 2,
        };
        assert_eq!(target.socket_addr(), "10.0.0.1:161");
    }

    #[test]
    fn output_mode_is_case_insensitive() {
        assert_eq!(OutputMode::parse("console"), Some(OutputMode::Console));
        assert_eq!(OutputMode::parse("TEXT"), Some(OutputMode::Text));
        assert_eq!(OutputMode::parse("Html"), Some(OutputMode::Html));
        assert_eq!(OutputMode::parse("xml"), None);
        assert_eq!(OutputMode::parse(""), None);
    }

    #[test]
    fn timeout_defaults_to_settings_value() {
        let config = RunConfig {
            target: QueryTarget {
                address: "10.0.0.1".to_string(),
                community: "public".to_string(),
                port: 161,
                version: 2,
            },
            output: OutputMode::Console,
            settings: Settings::default(),
        };
        assert_eq!(config.get_timeout(), 10);
    }
}
