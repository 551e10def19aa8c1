//! Zone power and input-status control for Denon/Marantz receivers
//!
//! This library provides the zone-control glue between a home-automation
//! integration and a two-zone Denon/Marantz receiver. It supports:
//!
//! - Zone-addressed power query and control (main zone or zone2)
//! - Normalization of the zone2 wire encoding into a common power domain
//! - A dual-zone power-off policy (one request powers down both zones)
//! - Tri-state input status classification for display purposes
//! - Presentation helpers (zone display name, volume capability)
//! - Atomic configuration replacement when host settings change
//!
//! The actual receiver transport is not part of this crate: callers supply
//! an implementation of [`DeviceControl`], and the [`ZoneController`] routes
//! operations through it.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use denon_zone::{
//!     DeviceControl, PowerState, Result, Zone, Zone2Raw, ZoneConfig, ZoneController,
//! };
//!
//! // A transport that speaks the receiver's control protocol.
//! struct TelnetTransport;
//!
//! #[async_trait::async_trait]
//! impl DeviceControl for TelnetTransport {
//!     async fn get_power(&self) -> Result<PowerState> {
//!         todo!("query PW? over the control connection")
//!     }
//!     async fn set_power(&self, state: PowerState) -> Result<()> {
//!         todo!("send PW{} command", state.as_str())
//!     }
//!     async fn get_zone2(&self) -> Result<Zone2Raw> {
//!         todo!("query Z2? over the control connection")
//!     }
//!     async fn set_zone2(&self, state: Zone2Raw) -> Result<()> {
//!         todo!("send {} command", state.as_str())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let device = Arc::new(TelnetTransport);
//!     let config = ZoneConfig::new(Zone::Zone2, "GAME", true);
//!     let controller = ZoneController::new(device, config);
//!
//!     // Power queries and writes are routed to the configured zone
//!     let power = controller.get_power().await?;
//!     println!("{} is {}", controller.display_name(), power.as_str());
//!
//!     // A coordinated power-off honors the dual-zone policy
//!     controller.set_power_coordinated(PowerState::Standby).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized into a few small layers:
//!
//! - **Zone**: [`ZoneController`], the zone-routing and policy logic
//! - **Device**: [`DeviceControl`], the transport contract the caller implements
//! - **Config**: [`ZoneConfig`], the replaceable settings snapshot
//! - **Types**: power, zone, and status domain types with wire conversions

mod config;
mod device;
mod error;
mod types;
mod zone;

// Public exports
pub use config::ZoneConfig;
pub use device::DeviceControl;
pub use error::{Result, ZoneError};
pub use types::{InputStatus, PowerState, Zone, Zone2Raw};
pub use zone::ZoneController;
