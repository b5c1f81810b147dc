use snmp2::{AsyncSession, Oid};

use super::error::QueryError;
use super::value::SnmpValue;

pub struct SnmpClientV1 {
    session: AsyncSession,
}

impl SnmpClientV1 {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self, QueryError> {
        let session = AsyncSession::new_v1(target, community, 0)
            .await
            .map_err(|e| QueryError::Transport(format!("Не удалось создать SNMP сессию: {e}")))?;

        Ok(Self { session })
    }

    pub async fn get(&mut self, oid: &Oid<'_>) -> Result<SnmpValue, QueryError> {
        let resp = self
            .session
            .get(oid)
            .await
            .map_err(|e| QueryError::Transport(format!("SNMP GET запрос не удался: {e}")))?;

        let (_, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::Empty(oid.to_string()))?;

        Ok(SnmpValue::from_wire(&value))
    }

    /// Обход поддерева через GETNEXT: SNMPv1 не поддерживает GETBULK
    pub async fn walk(&mut self, root: &Oid<'_>) -> Result<Vec<(Oid<'static>, SnmpValue)>, QueryError> {
        let mut results: Vec<(Oid<'static>, SnmpValue)> = Vec::new();
        let mut current_oid = root.to_owned();

        loop {
            let resp = self
                .session
                .getnext(&current_oid)
                .await
                .map_err(|e| QueryError::Transport(format!("SNMP GETNEXT запрос не удался: {e}")))?;

            let mut advanced = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(root) {
                    return Ok(results);
                }
                // Агент, не продвигающий OID, зациклил бы обход
                if oid.to_string() == current_oid.to_string() {
                    return Ok(results);
                }

                results.push((oid.to_owned(), SnmpValue::from_wire(&value)));
                current_oid = oid.to_owned();
                advanced = true;
            }

            if !advanced {
                break;
            }
        }

        Ok(results)
    }
}
