use crate::types::Zone;
use serde::{Deserialize, Serialize};

/// Configuration snapshot for a zone controller
///
/// The serde field names match the settings keys the host integration
/// persists (`zone`, `setsource`, `powerOffBothZones`), so a stored settings
/// object deserializes directly into this type.
///
/// The controller holds its own copy; once handed in, a `ZoneConfig` is only
/// ever replaced wholesale via
/// [`ZoneController::replace_config`](crate::ZoneController::replace_config),
/// never mutated field-by-field from outside.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Which zone this controller addresses
    #[serde(default)]
    pub zone: Zone,

    /// Input considered "currently selected" for status classification
    #[serde(rename = "setsource", default)]
    pub target_input: String,

    /// When true, a power-off request powers down both zones regardless of
    /// which zone is configured
    #[serde(rename = "powerOffBothZones", default)]
    pub dual_zone_power_off: bool,
}

impl ZoneConfig {
    pub fn new(zone: Zone, target_input: impl Into<String>, dual_zone_power_off: bool) -> Self {
        Self {
            zone,
            target_input: target_input.into(),
            dual_zone_power_off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_settings_keys() {
        let json = r#"{
            "zone": "zone2",
            "setsource": "GAME",
            "powerOffBothZones": true
        }"#;

        let config: ZoneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.zone, Zone::Zone2);
        assert_eq!(config.target_input, "GAME");
        assert!(config.dual_zone_power_off);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ZoneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.zone, Zone::Main);
        assert_eq!(config.target_input, "");
        assert!(!config.dual_zone_power_off);
    }

    #[test]
    fn unrecognized_zone_string_is_preserved_as_unknown() {
        let config: ZoneConfig =
            serde_json::from_str(r#"{"zone": "zone3", "setsource": "CD"}"#).unwrap();
        assert_eq!(config.zone, Zone::Unknown);
    }
}
