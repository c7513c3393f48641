//! REST facing request and response bodies
//!
//! None of these expose raw attribute codes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Simplified metadata block carried by every device response
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeviceMetadata {
    pub id: i64,
    pub name: String,
    pub vendor: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Battery percentage, 0-100
    pub battery: i32,
}

/// Response from a light bulb GET
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulbResponse {
    pub device_metadata: DeviceMetadata,
    pub dimmer: i32,
    #[serde(rename = "xcolor")]
    pub color_x: i32,
    #[serde(rename = "ycolor")]
    pub color_y: i32,
    #[serde(rename = "rgbcolor")]
    pub rgb: String,
    pub power: bool,
}

/// Response from a blind GET
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlindResponse {
    pub device_metadata: DeviceMetadata,
    #[schema(minimum = 0.0, maximum = 100.0)]
    pub position: f32,
}

/// Response from a power plug GET
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlugResponse {
    pub device_metadata: DeviceMetadata,
    pub power: bool,
}

/// Response for a device the facade has no control shape for
///
/// Remotes and sensors end up here. The metadata is reported and every
/// control field is present with its zero value.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnrecognizedResponse {
    pub device_metadata: DeviceMetadata,
    pub dimmer: i32,
    #[serde(rename = "xcolor")]
    pub color_x: i32,
    #[serde(rename = "ycolor")]
    pub color_y: i32,
    #[serde(rename = "rgbcolor")]
    pub rgb: String,
    pub power: bool,
    pub position: f32,
}

impl UnrecognizedResponse {
    /// Metadata with zero valued controls
    pub fn new(device_metadata: DeviceMetadata) -> Self {
        UnrecognizedResponse {
            device_metadata,
            ..Default::default()
        }
    }
}

/// Any device response, serialized without a tag
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum DeviceResponse {
    Bulb(BulbResponse),
    Blind(BlindResponse),
    Plug(PlugResponse),
    Unrecognized(UnrecognizedResponse),
}

impl DeviceResponse {
    /// Accessor for the metadata block shared by all variants
    pub fn metadata(&self) -> &DeviceMetadata {
        match self {
            DeviceResponse::Bulb(b) => &b.device_metadata,
            DeviceResponse::Blind(b) => &b.device_metadata,
            DeviceResponse::Plug(p) => &p.device_metadata,
            DeviceResponse::Unrecognized(u) => &u.device_metadata,
        }
    }
}

/// Group response
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: i64,
    /// 1 when on, 0 when off
    pub power: i32,
    /// Creation time, RFC 3339
    #[schema(example = "2019-02-12T19:33:20+00:00")]
    pub created: String,
    pub device_list: Vec<i64>,
}

/// Plain acknowledgement of an accepted command
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub msg: String,
}

impl Ack {
    pub fn new(msg: &str) -> Self {
        Ack {
            msg: msg.to_string(),
        }
    }
}

/// Set a bulb color from a classic hex RGB string
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RgbColorRequest {
    #[serde(rename = "rgbcolor")]
    #[schema(example = "ff00aa", pattern = r"^[0-9a-fA-F]{6}$")]
    pub rgb: String,
}

/// Set a bulb color from CIE 1931 chromaticity, device native integers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorXyRequest {
    #[serde(rename = "xcolor")]
    pub x: i32,
    #[serde(rename = "ycolor")]
    pub y: i32,
}

/// Set the dimmer level, 0-255
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DimmingRequest {
    #[schema(minimum = 0, maximum = 255)]
    pub dimming: i32,
}

/// Set the power state, 1 is on and 0 is off
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PowerRequest {
    #[schema(minimum = 0, maximum = 1)]
    pub power: i32,
}

/// Set color, dimmer and power in a single PUT
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateRequest {
    #[serde(rename = "rgbcolor")]
    #[schema(example = "ff00aa", pattern = r"^[0-9a-fA-F]{6}$")]
    pub rgb: String,
    #[schema(minimum = 0, maximum = 255)]
    pub dimmer: i32,
    #[schema(minimum = 0, maximum = 1)]
    pub power: i32,
}

/// Set a blind position, 0-100
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PositioningRequest {
    #[schema(minimum = 0.0, maximum = 100.0)]
    pub positioning: f32,
}
