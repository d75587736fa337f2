//! JSON snapshot of the three stores.
//!
//! The snapshot is the durable state of the service: `{ users, products, orders }` in their wire
//! shapes. It is read once at startup to seed the actors and written once on shutdown.

use crate::model::{Order, Product, User};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.products.is_empty() && self.orders.is_empty()
    }

    /// Reads a snapshot; a file that does not exist yet is an empty snapshot.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No snapshot, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
        info!(
            path = %path.display(),
            users = snapshot.users.len(),
            products = snapshot.products.len(),
            orders = snapshot.orders.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Writes the snapshot sorted by id, replacing the file atomically.
    pub fn save(mut self, path: &Path) -> Result<()> {
        self.users.sort_by_key(|u| u.id);
        self.products.sort_by_key(|p| p.id);
        self.orders.sort_by_key(|o| o.id);

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&self)?;
        fs::write(&tmp, json).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to replace snapshot: {}", path.display()))?;
        info!(path = %path.display(), "Snapshot saved");
        Ok(())
    }
}
