use async_trait::async_trait;

use crate::domain::{Plate, VehicleData};

/// Response cache port - a bounded, time-windowed plate -> merged-result
/// store. Entries are owned by the store; callers only ever get copies.
#[async_trait]
pub trait VehicleCache: Send + Sync {
    /// Look up a plate. A stale entry is a miss.
    async fn get(&self, plate: &Plate) -> Option<VehicleData>;

    /// Store the merged result for a plate. Implementations enforce their
    /// own TTL and capacity bounds; a put never fails.
    async fn put(&self, plate: &Plate, data: VehicleData);

    /// Drop every entry.
    async fn clear(&self);
}
