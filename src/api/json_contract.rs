use serde::{Deserialize, Serialize};

use crate::error::{StarplotError, StarplotResult};

use super::StarplotSnapshot;

pub const STARPLOT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarplotSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: StarplotSnapshot,
}

impl StarplotSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> StarplotResult<String> {
        let payload = StarplotSnapshotJsonContractV1 {
            schema_version: STARPLOT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            StarplotError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// Payloads whose per-axis vectors disagree with `axis_count` are rejected.
    pub fn from_json_compat_str(input: &str) -> StarplotResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<StarplotSnapshot>(input) {
            snapshot.validate_shape()?;
            return Ok(snapshot);
        }
        let payload: StarplotSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                StarplotError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != STARPLOT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(StarplotError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        payload.snapshot.validate_shape()?;
        Ok(payload.snapshot)
    }
}
