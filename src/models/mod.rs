//! Tradfri models
//!
//! [wire] holds the gateway's numeric-keyed shapes, [rest] the bodies this
//! API accepts and returns, and [codes] the table tying the two together.

pub mod codes;
pub mod rest;
pub mod wire;

pub use codes::Attribute;
pub use rest::{
    Ack, BlindResponse, BulbResponse, ColorXyRequest, DeviceMetadata, DeviceResponse,
    DimmingRequest, GroupResponse, PlugResponse, PositioningRequest, PowerRequest,
    RgbColorRequest, StateRequest, UnrecognizedResponse,
};
pub use wire::{
    BlindCommand, BlindControl, ChannelRef, ControlOutlet, Device, DeviceCommand, DeviceList,
    General, Group, GroupContent, LightCommand, LightControl, Metadata, OutletControl,
    RemoteControl,
};
