//! Monitoring snapshot for a pool

use std::collections::HashMap;

/// Point-in-time view of a pool's counters.
///
/// Both fields are unsynchronized snapshots: concurrent `get`/`put` calls may
/// change the true values before the caller reads them.
///
/// # Examples
///
/// ```
/// use reuse_pool::Pool;
///
/// let pool: Pool<String> = Pool::new(String::new);
/// let item = pool.get().unwrap();
/// pool.put(item);
///
/// let stats = pool.stats();
/// assert_eq!(stats.idle, 1);
/// assert_eq!(stats.created, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    /// Items currently sitting in the idle container.
    pub idle: usize,

    /// Cumulative successful factory invocations since pool construction.
    /// Not reset by `clear`.
    pub created: u64,
}

impl PoolStats {
    /// Export the snapshot as string key/value pairs for log or metrics
    /// pipelines.
    pub fn export(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("idle_items".to_string(), self.idle.to_string());
        map.insert("creation_count".to_string(), self.created.to_string());
        map
    }
}
