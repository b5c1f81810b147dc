use anyhow::{Context, Result};
use snmp2::Oid;

/// sysName.0
pub const SYS_NAME: &str = "1.3.6.1.2.1.1.5.0";
/// sysUpTime.0
pub const SYS_UPTIME: &str = "1.3.6.1.2.1.1.3.0";

/// Колонки ifTable
pub const IF_INDEX: &str = "1.3.6.1.2.1.2.2.1.1";
pub const IF_DESCR: &str = "1.3.6.1.2.1.2.2.1.2";
pub const IF_OPER_STATUS: &str = "1.3.6.1.2.1.2.2.1.8";
pub const IF_LAST_CHANGE: &str = "1.3.6.1.2.1.2.2.1.9";

pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.context(format!("Невалидный OID: {}", s))?;
    Oid::from(&parts).map_err(|e| anyhow::anyhow!("Не удалось создать Oid: {:?}", e))
}

/// Последний компонент OID: для колонок ifTable это ifIndex строки
pub fn index_suffix(oid: &Oid<'_>) -> Option<u32> {
    oid.to_string().rsplit('.').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_oid() {
        let oid = parse_oid(IF_DESCR).expect("parse");
        assert_eq!(oid.to_string(), IF_DESCR);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_oid("not.an.oid").is_err());
    }

    #[test]
    fn suffix_is_the_row_index() {
        let oid = parse_oid("1.3.6.1.2.1.2.2.1.2.5").expect("parse");
        assert_eq!(index_suffix(&oid), Some(5));
    }
}
