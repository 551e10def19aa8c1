use serde::{Deserialize, Serialize};

/// Power state of a receiver zone
///
/// Both zones are exposed in this two-value domain; the zone2-specific wire
/// encoding ([`Zone2Raw`]) is translated at the controller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    Standby,
}

impl PowerState {
    /// Parse a raw main-zone power string from the receiver.
    ///
    /// Only the literal `"ON"` maps to [`PowerState::On`]; everything else,
    /// including case variants like `"on"`, is treated as standby. The
    /// receiver protocol is case-sensitive and this parse deliberately is too.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "ON" {
            PowerState::On
        } else {
            PowerState::Standby
        }
    }

    /// Wire string for the main-zone power protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Standby => "STANDBY",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

/// Zone2 power encoding as the receiver speaks it
///
/// Zone2 does not use the main-zone `ON`/`STANDBY` vocabulary; it has its own
/// on/off command pair. Callers of [`ZoneController`](crate::ZoneController)
/// never see this type in power results, only transport implementations do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone2Raw {
    #[serde(rename = "Z2ON")]
    On,
    #[serde(rename = "Z2OFF")]
    Off,
}

impl Zone2Raw {
    /// Parse a raw zone2 state string from the receiver.
    ///
    /// Only the distinguished `"Z2ON"` value maps to on; anything else is off.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "Z2ON" {
            Zone2Raw::On
        } else {
            Zone2Raw::Off
        }
    }

    /// Wire string for the zone2 power protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone2Raw::On => "Z2ON",
            Zone2Raw::Off => "Z2OFF",
        }
    }
}

impl From<PowerState> for Zone2Raw {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::On => Zone2Raw::On,
            PowerState::Standby => Zone2Raw::Off,
        }
    }
}

impl From<Zone2Raw> for PowerState {
    fn from(raw: Zone2Raw) -> Self {
        match raw {
            Zone2Raw::On => PowerState::On,
            Zone2Raw::Off => PowerState::Standby,
        }
    }
}

/// Which receiver zone a controller addresses
///
/// Settings written by older versions of the host integration may carry zone
/// strings this crate does not know; those deserialize to [`Zone::Unknown`]
/// rather than failing, and the presentation helpers treat them like the main
/// zone (with volume control disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Main,
    Zone2,
    #[serde(other)]
    Unknown,
}

/// Tri-state display status derived from power and input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    /// Powered on and the configured target input is selected
    Selected,
    /// Powered on but a different input is selected
    Deselected,
    /// Not powered on
    Standby,
}

impl InputStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputStatus::Selected => "selected",
            InputStatus::Deselected => "deselected",
            InputStatus::Standby => "standby",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_parse_is_case_sensitive() {
        assert_eq!(PowerState::from_raw("ON"), PowerState::On);
        assert_eq!(PowerState::from_raw("on"), PowerState::Standby);
        assert_eq!(PowerState::from_raw("STANDBY"), PowerState::Standby);
        assert_eq!(PowerState::from_raw(""), PowerState::Standby);
    }

    #[test]
    fn zone2_raw_round_trips_wire_strings() {
        assert_eq!(Zone2Raw::from_raw("Z2ON"), Zone2Raw::On);
        assert_eq!(Zone2Raw::from_raw("Z2OFF"), Zone2Raw::Off);
        assert_eq!(Zone2Raw::from_raw("garbage"), Zone2Raw::Off);
        assert_eq!(Zone2Raw::On.as_str(), "Z2ON");
        assert_eq!(Zone2Raw::Off.as_str(), "Z2OFF");
    }

    #[test]
    fn zone2_raw_maps_to_power_state() {
        assert_eq!(PowerState::from(Zone2Raw::On), PowerState::On);
        assert_eq!(PowerState::from(Zone2Raw::Off), PowerState::Standby);
        assert_eq!(Zone2Raw::from(PowerState::On), Zone2Raw::On);
        assert_eq!(Zone2Raw::from(PowerState::Standby), Zone2Raw::Off);
    }

    #[test]
    fn unknown_zone_strings_deserialize_to_unknown() {
        let zone: Zone = serde_json::from_str("\"zone2\"").unwrap();
        assert_eq!(zone, Zone::Zone2);
        let zone: Zone = serde_json::from_str("\"zone3\"").unwrap();
        assert_eq!(zone, Zone::Unknown);
    }
}
