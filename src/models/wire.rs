//! Gateway wire model
//!
//! Mirrors the numeric-keyed JSON the gateway speaks. Every serde key here
//! must appear in [crate::models::Attribute]; nothing outside this module and
//! [crate::models::codes] should ever spell a raw code.
//!
//! Gateway payloads routinely omit fields a given device type does not
//! support, so all structs default missing keys instead of failing.

use serde::{Deserialize, Serialize};

/// Attributes shared by every addressable entity (device, group, remote)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct General {
    #[serde(rename = "9001")]
    pub name: String,

    /// Unix timestamp (seconds) the gateway created the entity
    #[serde(rename = "9002")]
    pub created_at: i64,

    /// Gateway assigned, immutable id
    #[serde(rename = "9003")]
    pub id: i64,
}

/// Vendor information block, present on devices and remotes
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "0")]
    pub vendor: String,

    #[serde(rename = "1")]
    pub type_name: String,

    #[serde(rename = "2")]
    pub serial: String,

    /// Type category code (firmware version string on most devices)
    #[serde(rename = "3")]
    pub type_id: String,

    #[serde(rename = "6")]
    pub power_source: i32,

    /// Battery percentage, 0-100; zero for mains powered devices
    #[serde(rename = "9")]
    pub battery: i32,
}

/// One light control channel
///
/// All numeric values are device native; chromaticity is not normalized.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightControl {
    #[serde(rename = "9003")]
    pub id: i64,

    #[serde(rename = "5706")]
    pub rgb_hex: String,

    #[serde(rename = "5707")]
    pub hue: i32,

    #[serde(rename = "5708")]
    pub saturation: i32,

    #[serde(rename = "5709")]
    pub color_x: i32,

    #[serde(rename = "5710")]
    pub color_y: i32,

    #[serde(rename = "5850")]
    pub power: i32,

    #[serde(rename = "5851")]
    pub dimmer: i32,
}

/// One blind control channel
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlindControl {
    /// Percentage, 0.0-100.0
    #[serde(rename = "5536")]
    pub position: f32,

    #[serde(rename = "9003")]
    pub id: i64,
}

/// One outlet (power plug) control channel
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutletControl {
    #[serde(rename = "5850")]
    pub power: i32,

    #[serde(rename = "5851")]
    pub dimmer: i32,

    #[serde(rename = "9003")]
    pub id: i64,
}

/// A device of some kind
///
/// The kind is implied by which control collection is populated, see
/// [crate::translate::DeviceKind].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(flatten)]
    pub general: General,

    #[serde(rename = "3")]
    pub metadata: Metadata,

    #[serde(rename = "3311")]
    pub light_control: Vec<LightControl>,

    #[serde(rename = "3312")]
    pub power_control: Vec<OutletControl>,

    #[serde(rename = "15015")]
    pub blind_control: Vec<BlindControl>,

    #[serde(rename = "5750")]
    pub application_type: i32,

    #[serde(rename = "9019")]
    pub reachable_state: i32,

    #[serde(rename = "9020")]
    pub last_seen: i64,

    #[serde(rename = "9054")]
    pub ota_update_state: i32,
}

/// Member list of a [Group]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceList {
    #[serde(rename = "9003")]
    pub ids: Vec<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupContent {
    #[serde(rename = "15002")]
    pub device_list: DeviceList,
}

/// A named, ordered collection of devices addressed together
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    #[serde(flatten)]
    pub general: General,

    #[serde(rename = "5850")]
    pub power: i32,

    #[serde(rename = "5851")]
    pub dimmer: i32,

    #[serde(rename = "9018")]
    pub content: GroupContent,

    #[serde(rename = "9039")]
    pub scene_id: i64,

    #[serde(rename = "9108")]
    pub group_type: i32,
}

impl Group {
    /// Member device ids, in gateway order
    ///
    /// # Examples
    ///
    /// ```
    /// use tradfri_rest::models::Group;
    ///
    /// let group: Group = serde_json::from_str(
    ///     r#"{"9001": "Kitchen", "9003": 131073, "9018": {"15002": {"9003": [65537, 65538]}}}"#,
    /// ).unwrap();
    /// assert_eq!(group.device_ids(), &[65537, 65538]);
    /// ```
    ///
    pub fn device_ids(&self) -> &[i64] {
        &self.content.device_list.ids
    }
}

/// Reference to a paired device, as listed by a remote
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRef {
    #[serde(rename = "9003")]
    pub id: i64,
}

/// A battery powered remote control
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteControl {
    #[serde(flatten)]
    pub general: General,

    #[serde(rename = "3")]
    pub metadata: Metadata,

    #[serde(rename = "5750")]
    pub application_type: i32,

    #[serde(rename = "9019")]
    pub reachable_state: i32,

    #[serde(rename = "9020")]
    pub last_seen: i64,

    #[serde(rename = "9054")]
    pub ota_update_state: i32,

    #[serde(rename = "15009")]
    pub paired_devices: Vec<ChannelRef>,
}

/// A control outlet (power plug) as the gateway reports it standalone
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlOutlet {
    #[serde(flatten)]
    pub general: General,

    #[serde(rename = "3")]
    pub metadata: Metadata,

    #[serde(rename = "3312")]
    pub power_control: Vec<OutletControl>,

    #[serde(rename = "5750")]
    pub application_type: i32,

    #[serde(rename = "9019")]
    pub reachable_state: i32,

    #[serde(rename = "9020")]
    pub last_seen: i64,

    #[serde(rename = "9054")]
    pub ota_update_state: i32,

    #[serde(rename = "9084")]
    pub product: String,
}

impl From<ControlOutlet> for Device {
    fn from(outlet: ControlOutlet) -> Self {
        Device {
            general: outlet.general,
            metadata: outlet.metadata,
            power_control: outlet.power_control,
            application_type: outlet.application_type,
            reachable_state: outlet.reachable_state,
            last_seen: outlet.last_seen,
            ota_update_state: outlet.ota_update_state,
            ..Default::default()
        }
    }
}

impl From<RemoteControl> for Device {
    fn from(remote: RemoteControl) -> Self {
        Device {
            general: remote.general,
            metadata: remote.metadata,
            application_type: remote.application_type,
            reachable_state: remote.reachable_state,
            last_seen: remote.last_seen,
            ota_update_state: remote.ota_update_state,
            ..Default::default()
        }
    }
}

/// Light control command sent to the gateway
///
/// Only the fields that are set are serialized, so a command carrying just
/// an RGB value leaves power, dimmer and chromaticity untouched.
///
/// # Examples
///
/// ```
/// use tradfri_rest::models::LightCommand;
///
/// let cmd = LightCommand {
///     dimmer: Some(128),
///     ..Default::default()
/// };
/// assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"{"5851":128}"#);
/// ```
///
#[serde_with::skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCommand {
    #[serde(rename = "5706")]
    pub rgb_hex: Option<String>,

    #[serde(rename = "5709")]
    pub color_x: Option<i32>,

    #[serde(rename = "5710")]
    pub color_y: Option<i32>,

    #[serde(rename = "5850")]
    pub power: Option<i32>,

    #[serde(rename = "5851")]
    pub dimmer: Option<i32>,
}

/// Blind control command sent to the gateway
#[serde_with::skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlindCommand {
    #[serde(rename = "5536")]
    pub position: Option<f32>,
}

/// Body of a device PUT, addressing one control collection
///
/// Commands always target a single channel; the gateway applies every set
/// field of that channel atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceCommand {
    #[serde(rename = "3311")]
    Light(Vec<LightCommand>),

    #[serde(rename = "15015")]
    Blind(Vec<BlindCommand>),
}

impl DeviceCommand {
    /// Wrap a light command for the first light channel
    pub fn light(cmd: LightCommand) -> Self {
        DeviceCommand::Light(vec![cmd])
    }

    /// Wrap a blind command for the first blind channel
    pub fn blind(cmd: BlindCommand) -> Self {
        DeviceCommand::Blind(vec![cmd])
    }
}
