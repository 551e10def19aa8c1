use crate::error::Result;
use crate::types::{PowerState, Zone2Raw};
use async_trait::async_trait;

/// Contract for the component that performs actual receiver communication
///
/// The zone controller is transport-agnostic: it issues zone-addressed power
/// operations through this trait and never opens a connection itself.
/// Implementations own the wire protocol, command ordering, timeouts, and any
/// retry policy; the controller imposes none of those.
///
/// Zone2 operations speak the receiver's zone2-specific [`Zone2Raw`] encoding.
/// Translating it to and from the common [`PowerState`] domain is the
/// controller's job, not the transport's.
#[async_trait]
pub trait DeviceControl: Send + Sync {
    /// Query the main zone power state
    async fn get_power(&self) -> Result<PowerState>;

    /// Set the main zone power state
    async fn set_power(&self, state: PowerState) -> Result<()>;

    /// Query the zone2 power state in its raw encoding
    async fn get_zone2(&self) -> Result<Zone2Raw>;

    /// Set the zone2 power state in its raw encoding
    async fn set_zone2(&self, state: Zone2Raw) -> Result<()>;
}
