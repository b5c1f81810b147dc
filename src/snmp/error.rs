use thiserror::Error;

/// Виды отказов SNMP конвейера, каждому своя реакция на верхнем уровне
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// Сокет, отправка, прием или таймаут
    #[error("{0}")]
    Transport(String),
    /// Значение пришло, но его форма непригодна
    #[error("{0}")]
    Decode(String),
    /// Пустой ответ там, где ожидалась хотя бы одна строка
    #[error("empty result for {0}")]
    Empty(String),
}
