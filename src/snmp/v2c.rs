use snmp2::{AsyncSession, Oid};

use super::error::QueryError;
use super::value::SnmpValue;

pub struct SnmpClientV2c {
    session: AsyncSession,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self, QueryError> {
        let session = AsyncSession::new_v2c(target, community, 0)
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

    pub async fn walk(&mut self, root: &Oid<'_>) -> Result<Vec<(Oid<'static>, SnmpValue)>, QueryError> {
        self.walk_bulk(root, 10).await
    }

    pub async fn walk_bulk(
        &mut self,
        root: &Oid<'_>,
        max_repetitions: u32,
    ) -> Result<Vec<(Oid<'static>, SnmpValue)>, QueryError> {
        let mut results: Vec<(Oid<'static>, SnmpValue)> = Vec::new();
        let mut current_oid = root.to_owned();

        loop {
            let resp = self
                .session
                .getbulk(&[&current_oid], 0, max_repetitions)
                .await
                .map_err(|e| QueryError::Transport(format!("SNMP GETBULK запрос не удался: {e}")))?;

            let mut items = Vec::new();
            let mut found_any = false;

            // Значения копируются до следующего запроса: буфер приема общий
            for (oid, value) in resp.varbinds {
                if !oid.starts_with(root) {
                    results.extend(items);
                    return Ok(results);
                }

                items.push((oid.to_owned(), SnmpValue::from_wire(&value)));
                current_oid = oid.to_owned();
                found_any = true;
            }

            if !found_any {
                break;
            }

            results.extend(items);
        }

        Ok(results)
    }
}
