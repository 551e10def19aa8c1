use crate::config::ZoneConfig;
use crate::device::DeviceControl;
use crate::error::Result;
use crate::types::{InputStatus, PowerState, Zone, Zone2Raw};
use std::sync::{Arc, Mutex};

/// Zone-addressed power and input-status control for a receiver
///
/// A `ZoneController` maps the zone-agnostic [`PowerState`] model onto a
/// two-zone receiver: it routes queries and writes to whichever zone the
/// configuration names, normalizes the zone2 wire encoding, applies the
/// dual-zone power-off policy, and classifies device state into a
/// presentation-ready [`InputStatus`].
///
/// The controller holds no device state of its own. Every operation works
/// from the current configuration snapshot plus, where relevant, a fresh
/// reading from the device; there is nothing to invalidate or tear down.
pub struct ZoneController<D> {
    device: Arc<D>,
    config: Arc<Mutex<ZoneConfig>>,
}

impl<D> Clone for ZoneController<D> {
    fn clone(&self) -> Self {
        Self {
            device: self.device.clone(),
            config: self.config.clone(),
        }
    }
}

impl<D: DeviceControl> ZoneController<D> {
    /// Create a controller bound to a device and an initial configuration
    pub fn new(device: Arc<D>, config: ZoneConfig) -> Self {
        Self {
            device,
            config: Arc::new(Mutex::new(config)),
        }
    }

    /// Get a consistent copy of the current configuration
    ///
    /// Each operation reads the configuration exactly once, through this
    /// method, so a concurrent [`replace_config`](Self::replace_config) is
    /// observed either fully or not at all within a single call.
    pub fn config_snapshot(&self) -> ZoneConfig {
        self.config.lock().unwrap().clone()
    }

    /// Replace the held configuration wholesale
    ///
    /// Not synchronized against in-flight operations: calls already running
    /// keep the snapshot they took, calls issued afterwards see the new
    /// configuration.
    pub fn replace_config(&self, new_config: ZoneConfig) {
        *self.config.lock().unwrap() = new_config;
    }

    /// Get the power state of the configured zone
    ///
    /// For zone2 the receiver's raw encoding is mapped into the common
    /// [`PowerState`] domain; the main zone already speaks it directly.
    /// Device failures propagate unchanged.
    pub async fn get_power(&self) -> Result<PowerState> {
        match self.config_snapshot().zone {
            Zone::Zone2 => {
                let raw = self.device.get_zone2().await?;
                Ok(PowerState::from(raw))
            }
            _ => self.device.get_power().await,
        }
    }

    /// Set the power state of the configured zone
    ///
    /// Issues exactly one device write, addressed per the configured zone.
    pub async fn set_power(&self, target: PowerState) -> Result<()> {
        let config = self.config_snapshot();
        self.set_power_in(&config, target).await
    }

    async fn set_power_in(&self, config: &ZoneConfig, target: PowerState) -> Result<()> {
        match config.zone {
            Zone::Zone2 => self.device.set_zone2(Zone2Raw::from(target)).await,
            _ => self.device.set_power(target).await,
        }
    }

    /// Set the power state, honoring the dual-zone power-off policy
    ///
    /// When `dual_zone_power_off` is set and the target is standby, the main
    /// zone standby and zone2 off commands are issued concurrently and the
    /// call resolves once both succeed. If either fails, the first failure is
    /// returned and the other command's outcome is not reported separately.
    /// Powering on never fans out; it behaves as plain [`set_power`](Self::set_power).
    pub async fn set_power_coordinated(&self, target: PowerState) -> Result<()> {
        tracing::debug!("set_power_coordinated: target={}", target.as_str());

        let config = self.config_snapshot();
        if config.dual_zone_power_off && target == PowerState::Standby {
            futures_util::try_join!(
                self.device.set_power(PowerState::Standby),
                self.device.set_zone2(Zone2Raw::Off),
            )?;
            tracing::debug!("both zones powered off");
            Ok(())
        } else {
            self.set_power_in(&config, target).await
        }
    }

    /// Classify power and input into a display status
    ///
    /// Pure with respect to the device: both readings are supplied by the
    /// caller, typically from a freshly fetched state.
    pub fn classify_status(&self, power: PowerState, input: &str) -> InputStatus {
        let status = if !power.is_on() {
            InputStatus::Standby
        } else if input == self.config_snapshot().target_input {
            InputStatus::Selected
        } else {
            InputStatus::Deselected
        };
        tracing::debug!("receiver status: {}", status.as_str());
        status
    }

    /// Display name for the configured zone
    ///
    /// Unrecognized zone values display as the main zone.
    pub fn display_name(&self) -> &'static str {
        match self.config_snapshot().zone {
            Zone::Zone2 => "Zone 2",
            _ => "Main Zone",
        }
    }

    /// Whether volume control is available for the configured zone
    ///
    /// The zone2 control path on these receivers supports power and input
    /// only, so this is true strictly for the main zone.
    pub fn supports_volume_control(&self) -> bool {
        matches!(self.config_snapshot().zone, Zone::Main)
    }
}
