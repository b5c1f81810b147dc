use snmp2::Oid;

pub mod error;
pub mod oid;
pub mod v1;
pub mod v2c;
pub mod value;

pub use error::QueryError;
pub use oid::parse_oid;
pub use v1::SnmpClientV1;
pub use v2c::SnmpClientV2c;
pub use value::SnmpValue;

use crate::config::QueryTarget;

pub enum SnmpClient {
    V1(SnmpClientV1),
    V2c(SnmpClientV2c),
}

impl SnmpClient {
    pub async fn get(&mut self, oid: &Oid<'_>) -> Result<SnmpValue, QueryError> {
        match self {
            SnmpClient::V1(client) => client.get(oid).await,
            SnmpClient::V2c(client) => client.get(oid).await,
        }
    }

    pub async fn walk(&mut self, root: &Oid<'_>) -> Result<Vec<(Oid<'static>, SnmpValue)>, QueryError> {
        match self {
            SnmpClient::V1(client) => client.walk(root).await,
            SnmpClient::V2c(client) => client.walk(root).await,
        }
    }
}

/// Фабрика сессии по версии из параметров запуска
// TODO: поддержка SNMPv3 (USM) потребует отдельных учетных данных в CLI,
// пока версия 3 обслуживается community сессией v2c
pub async fn connect(target: &QueryTarget) -> Result<SnmpClient, QueryError> {
    let addr = target.socket_addr();
    let community = target.community.as_bytes();

    let client = match target.version {
        1 => SnmpClient::V1(SnmpClientV1::new(&addr, community).await?),
        _ => SnmpClient::V2c(SnmpClientV2c::new(&addr, community).await?),
    };

    tracing::debug!(version = target.version, addr = %addr, "SNMP сессия открыта");
    Ok(client)
}
