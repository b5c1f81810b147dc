use snmp2::Value;

/// Владеемая копия SNMP значения: ответ сессии живет в ее буфере приема,
/// поэтому значения копируются на границе клиента
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpValue {
    Int(i64),
    Uint(u64),
    Ticks(u64),
    Text(String),
    Other(String),
}

impl SnmpValue {
    pub fn from_wire(value: &Value<'_>) -> Self {
        match value {
            Value::Integer(n) => SnmpValue::Int(*n),
            Value::Counter32(n) | Value::Unsigned32(n) => SnmpValue::Uint(u64::from(*n)),
            Value::Counter64(n) => SnmpValue::Uint(*n),
            Value::Timeticks(n) => SnmpValue::Ticks(u64::from(*n)),
            Value::OctetString(bytes) => {
                SnmpValue::Text(String::from_utf8_lossy(bytes).into_owned())
            }
            other => SnmpValue::Other(format!("{:?}", other)),
        }
    }

    /// Счетчик времени в сотых долях секунды
    pub fn as_ticks(&self) -> Option<u64> {
        match self {
            SnmpValue::Ticks(n) | SnmpValue::Uint(n) => Some(*n),
            SnmpValue::Int(n) if *n >= 0 => Some(*n as u64),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SnmpValue::Int(n) => Some(*n),
            SnmpValue::Uint(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SnmpValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_from_timeticks_and_counters() {
        assert_eq!(SnmpValue::Ticks(8_640_000).as_ticks(), Some(8_640_000));
        assert_eq!(SnmpValue::Uint(42).as_ticks(), Some(42));
        assert_eq!(SnmpValue::Int(7).as_ticks(), Some(7));
        assert_eq!(SnmpValue::Int(-1).as_ticks(), None);
        assert_eq!(SnmpValue::Text("x".into()).as_ticks(), None);
    }

    #[test]
    fn int_conversions() {
        assert_eq!(SnmpValue::Int(2).as_int(), Some(2));
        assert_eq!(SnmpValue::Uint(5).as_int(), Some(5));
        assert_eq!(SnmpValue::Uint(u64::MAX).as_int(), None);
        assert_eq!(SnmpValue::Ticks(1).as_int(), None);
    }

    #[test]
    fn text_only_from_octet_strings() {
        assert_eq!(SnmpValue::Text("eth0".into()).as_text(), Some("eth0"));
        assert_eq!(SnmpValue::Int(1).as_text(), None);
    }

    #[test]
    fn wire_values_become_owned() {
        assert_eq!(SnmpValue::from_wire(&Value::Integer(2)), SnmpValue::Int(2));
        assert_eq!(
            SnmpValue::from_wire(&Value::Timeticks(360_000)),
            SnmpValue::Ticks(360_000)
        );
        assert_eq!(
            SnmpValue::from_wire(&Value::OctetString(b"GigabitEthernet0/1")),
            SnmpValue::Text("GigabitEthernet0/1".into())
        );
    }
}
