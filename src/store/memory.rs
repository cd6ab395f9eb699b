use super::StatusStore;
use crate::models::status_check::{StatusCheck, StatusCheckCreate};
use async_trait::async_trait;
use std::sync::RwLock;

/// Process-local store. Nothing survives a restart, and each process (or each
/// instance of this struct) sees only its own records.
#[derive(Debug, Default)]
pub struct MemoryStatusStore {
    checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        MemoryStatusStore { checks: RwLock::new(Vec::new()) }
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("status check storage lock poisoned")
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn create(&self, input: StatusCheckCreate) -> anyhow::Result<StatusCheck> {
        let check = StatusCheck::new(input);
        self.checks.write().map_err(poisoned)?.push(check.clone());
        Ok(check)
    }

    async fn list(&self) -> anyhow::Result<Vec<StatusCheck>> {
        Ok(self.checks.read().map_err(poisoned)?.clone())
    }

    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<StatusCheck>> {
        let checks = self.checks.read().map_err(poisoned)?;
        Ok(checks.iter().find(|check| check.id == id).cloned())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
