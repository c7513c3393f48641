//! Tradfri REST - IKEA Tradfri gateway facade
//!
//! Exposes gateway groups and devices (bulbs, blinds, outlets, remotes) as
//! plain JSON resources, translating to and from the gateway's
//! numeric-attribute-coded wire model.
//!
//! # Examples
//!
//! ```
//! use tradfri_rest::models::{Device, DeviceResponse};
//! use tradfri_rest::translate::to_device_response;
//!
//! let device: Device = serde_json::from_str(r#"{
//!     "9001": "Hallway",
//!     "9003": 65537,
//!     "3": {"0": "IKEA of Sweden", "1": "TRADFRI bulb E27 WS opal 980lm"},
//!     "3311": [{"5706": "f5faf6", "5709": 24930, "5710": 24694, "5850": 1, "5851": 254}]
//! }"#).unwrap();
//!
//! match to_device_response(&device) {
//!     DeviceResponse::Bulb(bulb) => {
//!         assert_eq!(bulb.device_metadata.name, "Hallway");
//!         assert_eq!(bulb.rgb, "f5faf6");
//!         assert_eq!(bulb.dimmer, 254);
//!         assert!(bulb.power);
//!     }
//!     other => panic!("not a bulb: {:?}", other),
//! }
//! ```
//!
//! # API
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | GET | `/api/groups` | |
//! | GET | `/api/groups/{id}` | |
//! | GET | `/api/groups/{id}/deviceIds` | |
//! | GET | `/api/groups/{id}/devices` | |
//! | GET | `/api/device/{id}` | |
//! | PUT | `/api/device/{id}/color` | `{"xcolor", "ycolor"}` |
//! | PUT | `/api/device/{id}/rgb` | `{"rgbcolor"}` |
//! | PUT | `/api/device/{id}/dimmer` | `{"dimming"}` |
//! | PUT | `/api/device/{id}/power` | `{"power"}` |
//! | PUT | `/api/device/{id}` | `{"rgbcolor", "dimmer", "power"}` |
//! | PUT | `/api/device/{id}/position` | `{"positioning"}` |
//!
//! The OpenAPI document is served at `/api/swagger-ui/` while
//! `tradfri-api` is running.
//!
//! # CLI
//!
//! `tradfri` translates saved gateway JSON offline:
//!
//! ```bash
//! $ tradfri device bulb.json
//! $ tradfri group kitchen.json
//! $ tradfri --codes
//! ```
//!

pub mod client;
pub mod commands;
pub mod config;
pub mod models;
pub mod translate;

mod errors;
mod fixture;
mod routes;

pub use client::GatewayClient;
pub use commands::Commands;
pub use config::Config;
pub use errors::Error;
pub use fixture::{FixtureGateway, Snapshot};
pub use routes::{configure, devices, groups, health};

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
