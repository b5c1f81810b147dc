pub mod device_info;
pub mod interfaces;
pub mod types;

pub use types::{DeviceSnapshot, InterfaceRecord, SwitchSnapshot};

use device_info::DeviceInfoCollector;
use interfaces::InterfaceCollector;

use crate::config::RunConfig;
use crate::snmp::{QueryError, SnmpClient};

/// Последовательный опрос устройства: имя, аптайм, интерфейсы.
/// Отказ любого шага обрывает оставшиеся
pub struct SwitchCollector;

impl SwitchCollector {
    pub async fn collect_all(
        client: &mut SnmpClient,
        config: &RunConfig,
    ) -> Result<SwitchSnapshot, QueryError> {
        let system_name = DeviceInfoCollector::system_name(client, config).await?;
        let (uptime_ticks, uptime_readable) =
            DeviceInfoCollector::system_uptime(client, config).await?;
        let interfaces = InterfaceCollector::collect(client, config).await?;

        Ok(SwitchSnapshot {
            device: DeviceSnapshot {
                system_name,
                uptime_ticks,
                uptime_readable,
            },
            interfaces,
        })
    }
}
