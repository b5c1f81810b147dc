use std::collections::BTreeMap;

use snmp2::Oid;
use tokio::time::{Duration, timeout};

use super::types::InterfaceRecord;
use crate::config::RunConfig;
use crate::snmp::{QueryError, SnmpClient, SnmpValue, oid, parse_oid};

/// Сбор и объединение колонок ifTable
pub struct InterfaceCollector;

impl InterfaceCollector {
    /// Четыре независимых обхода колонок, объединение по ifIndex
    pub async fn collect(
        client: &mut SnmpClient,
        config: &RunConfig,
    ) -> Result<Vec<InterfaceRecord>, QueryError> {
        let indexes = Self::walk_column(client, oid::IF_INDEX, config).await;
        if indexes.is_empty() {
            return Err(QueryError::Empty(oid::IF_INDEX.to_string()));
        }

        let descriptions = Self::walk_column(client, oid::IF_DESCR, config).await;
        let statuses = Self::walk_column(client, oid::IF_OPER_STATUS, config).await;
        let last_changes = Self::walk_column(client, oid::IF_LAST_CHANGE, config).await;

        Ok(join_columns(&indexes, &descriptions, &statuses, &last_changes))
    }

    /// Обход одной колонки; отказ обхода печатается и дает пустой результат,
    /// итоговая диагностика тогда пройдет через проверку доступности
    async fn walk_column(
        client: &mut SnmpClient,
        column: &str,
        config: &RunConfig,
    ) -> BTreeMap<u32, SnmpValue> {
        let root = match parse_oid(column) {
            Ok(root) => root,
            Err(e) => {
                println!("ERROR: {e}");
                return BTreeMap::new();
            }
        };

        let timeout_duration = Duration::from_secs(config.get_timeout());
        let rows = match timeout(timeout_duration, client.walk(&root)).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => {
                println!("ERROR: {e}");
                Vec::new()
            }
            Err(_) => {
                println!("ERROR: TIMEOUT");
                Vec::new()
            }
        };

        tracing::debug!(column, rows = rows.len(), "колонка ifTable прочитана");
        by_index(rows)
    }
}

/// Раскладывает строки обхода по последнему компоненту OID
fn by_index(rows: Vec<(Oid<'static>, SnmpValue)>) -> BTreeMap<u32, SnmpValue> {
    rows.into_iter()
        .filter_map(|(oid, value)| oid::index_suffix(&oid).map(|idx| (idx, value)))
        .collect()
}

/// Объединяет четыре колонки по индексу интерфейса; строка без полного
/// набора пригодных колонок пропускается
fn join_columns(
    indexes: &BTreeMap<u32, SnmpValue>,
    descriptions: &BTreeMap<u32, SnmpValue>,
    statuses: &BTreeMap<u32, SnmpValue>,
    last_changes: &BTreeMap<u32, SnmpValue>,
) -> Vec<InterfaceRecord> {
    let mut records = Vec::new();

    for (idx, index_value) in indexes {
        let (Some(descr), Some(status), Some(change)) = (
            descriptions.get(idx),
            statuses.get(idx),
            last_changes.get(idx),
        ) else {
            tracing::debug!(index = *idx, "неполная строка ifTable пропущена");
            continue;
        };

        let Some(description) = descr.as_text() else {
            tracing::debug!(index = *idx, "ifDescr не строка, строка пропущена");
            continue;
        };
        let Some(oper_status) = status.as_int() else {
            tracing::debug!(index = *idx, "ifOperStatus не число, строка пропущена");
            continue;
        };
        let Some(last_change_ticks) = change.as_ticks() else {
            tracing::debug!(index = *idx, "ifLastChange не счетчик, строка пропущена");
            continue;
        };

        records.push(InterfaceRecord {
            index: index_value.as_int().unwrap_or(i64::from(*idx)),
            description: description.to_string(),
            oper_status,
            last_change_ticks,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::parse_oid;

    fn column(entries: &[(u32, SnmpValue)]) -> BTreeMap<u32, SnmpValue> {
        entries.iter().cloned().collect()
    }

    #[test]
    fn walk_rows_keyed_by_oid_suffix() {
        let rows = vec![
            (
                parse_oid("1.3.6.1.2.1.2.2.1.2.1").expect("oid"),
                SnmpValue::Text("eth0".into()),
            ),
            (
                parse_oid("1.3.6.1.2.1.2.2.1.2.3").expect("oid"),
                SnmpValue::Text("eth2".into()),
            ),
        ];

        let map = by_index(rows);
        assert_eq!(map.get(&1), Some(&SnmpValue::Text("eth0".into())));
        assert_eq!(map.get(&3), Some(&SnmpValue::Text("eth2".into())));
        assert_eq!(map.get(&2), None);
    }

    #[test]
    fn joins_full_rows_in_index_order() {
        let records = join_columns(
            &column(&[(2, SnmpValue::Int(2)), (1, SnmpValue::Int(1))]),
            &column(&[
                (1, SnmpValue::Text("eth0".into())),
                (2, SnmpValue::Text("eth1".into())),
            ]),
            &column(&[(1, SnmpValue::Int(1)), (2, SnmpValue::Int(2))]),
            &column(&[(1, SnmpValue::Ticks(100)), (2, SnmpValue::Ticks(200))]),
        );

        assert_eq!(
            records,
            vec![
                InterfaceRecord {
                    index: 1,
                    description: "eth0".into(),
                    oper_status: 1,
                    last_change_ticks: 100,
                },
                InterfaceRecord {
                    index: 2,
                    description: "eth1".into(),
                    oper_status: 2,
                    last_change_ticks: 200,
                },
            ]
        );
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let records = join_columns(
            &column(&[(1, SnmpValue::Int(1)), (2, SnmpValue::Int(2))]),
            &column(&[(1, SnmpValue::Text("eth0".into()))]),
            &column(&[(1, SnmpValue::Int(1)), (2, SnmpValue::Int(1))]),
            &column(&[(1, SnmpValue::Ticks(100)), (2, SnmpValue::Ticks(200))]),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "eth0");
    }

    #[test]
    fn malformed_values_are_skipped() {
        let records = join_columns(
            &column(&[(1, SnmpValue::Int(1))]),
            &column(&[(1, SnmpValue::Text("eth0".into()))]),
            &column(&[(1, SnmpValue::Text("up".into()))]),
            &column(&[(1, SnmpValue::Ticks(100))]),
        );

        assert!(records.is_empty());
    }
}
