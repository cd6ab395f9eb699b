use crate::libs::global::now_utc;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_STATUS: &str = "active";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Request body of `POST /api/status`. `client_name` is taken as-is, an empty
/// name is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl StatusCheckCreate {
    pub fn new(client_name: impl Into<String>) -> Self {
        StatusCheckCreate { client_name: client_name.into(), status: default_status() }
    }
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate) -> Self {
        StatusCheck {
            id: Uuid::new_v4().to_string(),
            client_name: input.client_name,
            status: input.status,
            timestamp: now_utc(),
        }
    }
}

/// Text form of a timestamp at the persistence boundary. Keeps every
/// nanosecond so that `decode_timestamp(&encode_timestamp(t)) == t`.
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub fn decode_timestamp(text: &str) -> anyhow::Result<DateTime<Utc>> {
    let timestamp = DateTime::parse_from_rfc3339(text)
        .map_err(|e| anyhow::anyhow!("invalid timestamp {:?}: {}", text, e))?;
    Ok(timestamp.with_timezone(&Utc))
}
