use tokio::time::{Duration, timeout};

use crate::config::RunConfig;
use crate::formatter;
use crate::snmp::{QueryError, SnmpClient, SnmpValue, oid, parse_oid};

/// Сбор общих сведений об устройстве
pub struct DeviceInfoCollector;

impl DeviceInfoCollector {
    /// Имя устройства из sysName.0
    pub async fn system_name(
        client: &mut SnmpClient,
        config: &RunConfig,
    ) -> Result<String, QueryError> {
        let value = Self::get_with_timeout(client, oid::SYS_NAME, config).await?;
        match value.as_text() {
            Some(name) => Ok(name.trim().to_string()),
            None => Err(QueryError::Decode(format!(
                "sysName: неожиданное значение {value:?}"
            ))),
        }
    }

    /// Счетчик аптайма из sysUpTime.0 вместе с читаемой формой
    pub async fn system_uptime(
        client: &mut SnmpClient,
        config: &RunConfig,
    ) -> Result<(u64, String), QueryError> {
        let value = Self::get_with_timeout(client, oid::SYS_UPTIME, config).await?;
        match value.as_ticks() {
            Some(ticks) => Ok((ticks, formatter::format_time_ticks(ticks))),
            None => Err(QueryError::Decode(format!(
                "sysUpTime: неожиданное значение {value:?}"
            ))),
        }
    }

    async fn get_with_timeout(
        client: &mut SnmpClient,
        oid_str: &str,
        config: &RunConfig,
    ) -> Result<SnmpValue, QueryError> {
        let oid = parse_oid(oid_str).map_err(|e| QueryError::Decode(e.to_string()))?;
        let timeout_duration = Duration::from_secs(config.get_timeout());

        match timeout(timeout_duration, client.get(&oid)).await {
            Ok(result) => result,
            Err(_) => Err(QueryError::Transport("TIMEOUT".to_string())),
        }
    }
}
