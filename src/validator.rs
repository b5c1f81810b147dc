use thiserror::Error;

use crate::config::{OutputMode, QueryTarget};

/// Ошибки проверки входа, по одному различимому сообщению на причину
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid IP address: Missing Octet")]
    AddressMissingOctet,
    #[error("Please enter a valid IP address: Octet out of range")]
    AddressOctetOutOfRange,
    #[error("Please enter a valid Community String")]
    EmptyCommunity,
    #[error("Please enter a valid SNMP Version")]
    VersionNotNumeric,
    #[error("Please enter an SNMP Version between 1 and 3")]
    VersionOutOfRange,
    #[error("Please enter a valid SNMP Port")]
    PortNotNumeric,
    #[error("Please enter a valid output option or omit for console output")]
    InvalidOutputMode,
}

/// Сырые значения пяти полей после подстановки значений по умолчанию
#[derive(Debug, Clone)]
pub struct RawOptions {
    pub address: String,
    pub community: String,
    pub port: String,
    pub version: String,
    pub output: String,
}

/// Проверяет все пять полей разом, без раннего выхода: пользователь
/// видит полный список проблем за один запуск
pub fn validate(raw: &RawOptions) -> Result<(QueryTarget, OutputMode), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = check_address(&raw.address) {
        errors.push(e);
    }
    if let Err(e) = check_community(&raw.community) {
        errors.push(e);
    }
    if let Err(e) = check_version(&raw.version) {
        errors.push(e);
    }
    if let Err(e) = check_port(&raw.port) {
        errors.push(e);
    }
    let output = match OutputMode::parse(&raw.output) {
        Some(mode) => Some(mode),
        None => {
            errors.push(ValidationError::InvalidOutputMode);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // Разборы ниже не могут упасть: поля уже проверены
    let target = QueryTarget {
        address: raw.address.clone(),
        community: raw.community.clone(),
        port: raw.port.parse().unwrap_or(161),
        version: raw.version.parse().unwrap_or(2),
    };

    Ok((target, output.unwrap_or(OutputMode::Console)))
}

fn check_address(address: &str) -> Result<(), ValidationError> {
    let octets: Vec<&str> = address.split('.').collect();
    if octets.len() != 4 {
        return Err(ValidationError::AddressMissingOctet);
    }
    for octet in octets {
        match octet.parse::<i64>() {
            Ok(n) if (0..=255).contains(&n) => {}
            // Нечисловой октет тоже вне диапазона [0,255]
            _ => return Err(ValidationError::AddressOctetOutOfRange),
        }
    }
    Ok(())
}

fn check_community(community: &str) -> Result<(), ValidationError> {
    if community.is_empty() {
        return Err(ValidationError::EmptyCommunity);
    }
    Ok(())
}

fn check_version(version: &str) -> Result<(), ValidationError> {
    match version.parse::<i64>() {
        Err(_) => Err(ValidationError::VersionNotNumeric),
        Ok(n) if !(1..=3).contains(&n) => Err(ValidationError::VersionOutOfRange),
        Ok(_) => Ok(()),
    }
}

/// Порт принимает любое целое, в том числе ноль и отрицательные:
/// негодное значение уронит создание сессии само
fn check_port(port: &str) -> Result<(), ValidationError> {
    match port.parse::<i64>() {
        Err(_) => Err(ValidationError::PortNotNumeric),
        Ok(_) => Ok(()),
    }
}
