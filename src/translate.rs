//! Translation between the gateway wire model and the REST models
//!
//! Responses are always rebuilt from scratch from the latest fetch; nothing
//! here mutates its input.

use chrono::{DateTime, Utc};
use log::warn;

use crate::models::{
    BlindCommand, BlindControl, BlindResponse, BulbResponse, Device, DeviceCommand, DeviceList,
    DeviceMetadata, DeviceResponse, General, Group, GroupContent, GroupResponse, LightCommand,
    LightControl, OutletControl, PlugResponse, UnrecognizedResponse,
};

/// What a device is, decided by which control collection it populates
///
/// Carries the first channel of the matching collection, which is the only
/// one read; devices with several channels report channel 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceKind<'a> {
    Bulb(&'a LightControl),
    Blind(&'a BlindControl),
    Plug(&'a OutletControl),
    /// No known control shape (remotes, sensors, future device types)
    Unrecognized,
}

impl<'a> DeviceKind<'a> {
    /// Classify a device
    ///
    /// Light control wins over blind control, which wins over outlet
    /// control. Valid gateway data never populates more than one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tradfri_rest::models::{BlindControl, Device};
    /// use tradfri_rest::translate::DeviceKind;
    ///
    /// let mut device = Device::default();
    /// assert_eq!(DeviceKind::of(&device), DeviceKind::Unrecognized);
    ///
    /// device.blind_control.push(BlindControl { position: 40.0, id: 0 });
    /// assert!(matches!(DeviceKind::of(&device), DeviceKind::Blind(b) if b.position == 40.0));
    /// ```
    ///
    pub fn of(device: &'a Device) -> Self {
        if let Some(light) = device.light_control.first() {
            if !device.blind_control.is_empty() {
                warn!(
                    "device {} has both light and blind controls, treating as a bulb",
                    device.general.id
                );
            }
            DeviceKind::Bulb(light)
        } else if let Some(blind) = device.blind_control.first() {
            DeviceKind::Blind(blind)
        } else if let Some(outlet) = device.power_control.first() {
            DeviceKind::Plug(outlet)
        } else {
            DeviceKind::Unrecognized
        }
    }

    /// Lower case label, used in logs
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Bulb(_) => "bulb",
            DeviceKind::Blind(_) => "blind",
            DeviceKind::Plug(_) => "plug",
            DeviceKind::Unrecognized => "unrecognized",
        }
    }
}

/// Build the simplified metadata block of a device
pub fn to_device_metadata(device: &Device) -> DeviceMetadata {
    DeviceMetadata {
        id: device.general.id,
        name: device.general.name.clone(),
        vendor: device.metadata.vendor.clone(),
        type_name: device.metadata.type_name.clone(),
        battery: device.metadata.battery,
    }
}

/// Shape a device into the response matching its kind
///
/// Never fails: a device with no known control shape produces its
/// metadata with zero valued control fields.
pub fn to_device_response(device: &Device) -> DeviceResponse {
    let device_metadata = to_device_metadata(device);
    match DeviceKind::of(device) {
        DeviceKind::Bulb(light) => DeviceResponse::Bulb(BulbResponse {
            device_metadata,
            dimmer: light.dimmer,
            color_x: light.color_x,
            color_y: light.color_y,
            rgb: light.rgb_hex.clone(),
            power: light.power == 1,
        }),
        DeviceKind::Blind(blind) => DeviceResponse::Blind(BlindResponse {
            device_metadata,
            position: blind.position,
        }),
        DeviceKind::Plug(outlet) => DeviceResponse::Plug(PlugResponse {
            device_metadata,
            power: outlet.power == 1,
        }),
        DeviceKind::Unrecognized => {
            warn!(
                "device {} ({}) has no known control shape",
                device.general.id, device.metadata.type_name
            );
            DeviceResponse::Unrecognized(UnrecognizedResponse::new(device_metadata))
        }
    }
}

/// Shape a group into its response
pub fn to_group_response(group: &Group) -> GroupResponse {
    GroupResponse {
        id: group.general.id,
        power: group.power,
        created: created_string(group.general.created_at),
        device_list: group.device_ids().to_vec(),
    }
}

/// Render a gateway creation timestamp (unix seconds) as RFC 3339
///
/// # Examples
///
/// ```
/// use tradfri_rest::translate::{created_string, created_timestamp};
///
/// assert_eq!(created_string(1550000000), "2019-02-12T19:33:20+00:00");
/// assert_eq!(created_timestamp("2019-02-12T19:33:20+00:00"), 1550000000);
/// ```
///
pub fn created_string(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(dt) => dt.to_rfc3339(),
        None => timestamp.to_string(),
    }
}

/// Inverse of [created_string]; unparseable input yields zero
pub fn created_timestamp(created: &str) -> i64 {
    match DateTime::parse_from_rfc3339(created) {
        Ok(dt) => dt.timestamp(),
        Err(_) => created.parse().unwrap_or(0),
    }
}

impl From<&GroupResponse> for Group {
    /// Rebuild the wire group a response describes
    ///
    /// The response does not carry a name or scene, those stay empty.
    fn from(resp: &GroupResponse) -> Self {
        Group {
            general: General {
                name: String::new(),
                created_at: created_timestamp(&resp.created),
                id: resp.id,
            },
            power: resp.power,
            content: GroupContent {
                device_list: DeviceList {
                    ids: resp.device_list.clone(),
                },
            },
            ..Default::default()
        }
    }
}

/// Light command setting only the chromaticity pair
pub fn color_xy_command(x: i32, y: i32) -> DeviceCommand {
    DeviceCommand::light(LightCommand {
        color_x: Some(x),
        color_y: Some(y),
        ..Default::default()
    })
}

/// Light command setting only the RGB color
pub fn rgb_command(rgb: &str) -> DeviceCommand {
    DeviceCommand::light(LightCommand {
        rgb_hex: Some(rgb.to_string()),
        ..Default::default()
    })
}

/// Light command setting only the dimmer level
pub fn dimmer_command(level: i32) -> DeviceCommand {
    DeviceCommand::light(LightCommand {
        dimmer: Some(level),
        ..Default::default()
    })
}

/// Light command setting only the power flag
pub fn power_command(power: i32) -> DeviceCommand {
    DeviceCommand::light(LightCommand {
        power: Some(power),
        ..Default::default()
    })
}

/// One light command carrying power, dimmer and RGB together
///
/// The gateway applies a single command atomically, which avoids the
/// flicker of three separate writes.
pub fn state_command(power: i32, dimmer: i32, rgb: &str) -> DeviceCommand {
    DeviceCommand::light(LightCommand {
        rgb_hex: Some(rgb.to_string()),
        power: Some(power),
        dimmer: Some(dimmer),
        ..Default::default()
    })
}

/// Blind command setting the position
pub fn position_command(position: f32) -> DeviceCommand {
    DeviceCommand::blind(BlindCommand {
        position: Some(position),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metadata;

    fn metadata() -> Metadata {
        Metadata {
            vendor: "IKEA of Sweden".to_string(),
            type_name: "TRADFRI bulb E27 CWS opal 600lm".to_string(),
            battery: 0,
            ..Default::default()
        }
    }

    fn device(id: i64) -> Device {
        Device {
            general: General {
                name: format!("device {id}"),
                created_at: 1_550_000_000,
                id,
            },
            metadata: metadata(),
            ..Default::default()
        }
    }

    fn light(rgb: &str, dimmer: i32) -> LightControl {
        LightControl {
            rgb_hex: rgb.to_string(),
            color_x: 30015,
            color_y: 26870,
            power: 1,
            dimmer,
            ..Default::default()
        }
    }

    #[test]
    fn bulb_uses_first_light_channel() {
        let mut bulb = device(65537);
        bulb.light_control = vec![light("f1e0b5", 200), light("000000", 1)];

        let resp = to_device_response(&bulb);
        assert_eq!(
            resp,
            DeviceResponse::Bulb(BulbResponse {
                device_metadata: DeviceMetadata {
                    id: 65537,
                    name: "device 65537".to_string(),
                    vendor: "IKEA of Sweden".to_string(),
                    type_name: "TRADFRI bulb E27 CWS opal 600lm".to_string(),
                    battery: 0,
                },
                dimmer: 200,
                color_x: 30015,
                color_y: 26870,
                rgb: "f1e0b5".to_string(),
                power: true,
            })
        );
    }

    #[test]
    fn light_control_takes_precedence_over_blind() {
        let mut odd = device(1);
        odd.light_control = vec![light("ffffff", 10)];
        odd.blind_control = vec![BlindControl {
            position: 50.0,
            id: 0,
        }];
        assert!(matches!(to_device_response(&odd), DeviceResponse::Bulb(_)));
    }

    #[test]
    fn blind_reports_position() {
        let mut blind = device(65550);
        blind.metadata.battery = 64;
        blind.blind_control = vec![BlindControl {
            position: 37.5,
            id: 0,
        }];

        match to_device_response(&blind) {
            DeviceResponse::Blind(resp) => {
                assert_eq!(resp.position, 37.5);
                assert_eq!(resp.device_metadata.battery, 64);
            }
            other => panic!("expected blind, got {other:?}"),
        }
    }

    #[test]
    fn outlet_reports_power() {
        let mut plug = device(65560);
        plug.power_control = vec![OutletControl {
            power: 1,
            dimmer: 0,
            id: 0,
        }];
        match to_device_response(&plug) {
            DeviceResponse::Plug(resp) => assert!(resp.power),
            other => panic!("expected plug, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_keeps_metadata() {
        let remote = device(65540);
        let resp = to_device_response(&remote);
        assert!(matches!(resp, DeviceResponse::Unrecognized(_)));
        assert_eq!(resp.metadata().id, 65540);
        assert_eq!(resp.metadata().vendor, "IKEA of Sweden");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            serde_json::json!({
                "deviceMetadata": {
                    "id": 65540,
                    "name": "device 65540",
                    "vendor": "IKEA of Sweden",
                    "type": "TRADFRI bulb E27 CWS opal 600lm",
                    "battery": 0
                },
                "dimmer": 0,
                "xcolor": 0,
                "ycolor": 0,
                "rgbcolor": "",
                "power": false,
                "position": 0.0
            })
        );
    }

    #[test]
    fn blind_and_light_take_precedence_over_outlet() {
        let outlet = OutletControl {
            power: 1,
            dimmer: 0,
            id: 0,
        };

        let mut blind = device(2);
        blind.blind_control = vec![BlindControl {
            position: 80.0,
            id: 0,
        }];
        blind.power_control = vec![outlet.clone()];
        assert!(matches!(DeviceKind::of(&blind), DeviceKind::Blind(b) if b.position == 80.0));

        let mut bulb = device(3);
        bulb.light_control = vec![light("ffffff", 10)];
        bulb.power_control = vec![outlet];
        assert!(matches!(to_device_response(&bulb), DeviceResponse::Bulb(_)));
    }

    #[test]
    fn bulb_serializes_with_public_names() {
        let mut bulb = device(3);
        bulb.light_control = vec![light("ff00aa", 12)];
        let value = serde_json::to_value(to_device_response(&bulb)).unwrap();
        assert_eq!(value["rgbcolor"], "ff00aa");
        assert_eq!(value["xcolor"], 30015);
        assert_eq!(value["ycolor"], 26870);
        assert_eq!(value["dimmer"], 12);
        assert_eq!(value["power"], true);
        assert_eq!(value["deviceMetadata"]["type"], "TRADFRI bulb E27 CWS opal 600lm");
    }

    #[test]
    fn group_round_trip() {
        let group = Group {
            general: General {
                name: "Living room".to_string(),
                created_at: 1_550_000_000,
                id: 131073,
            },
            power: 1,
            content: GroupContent {
                device_list: DeviceList {
                    ids: vec![65539, 65537, 65538],
                },
            },
            ..Default::default()
        };

        let resp = to_group_response(&group);
        assert_eq!(resp.created, "2019-02-12T19:33:20+00:00");
        assert_eq!(resp.device_list, vec![65539, 65537, 65538]);

        let back = Group::from(&resp);
        assert_eq!(back.general.id, group.general.id);
        assert_eq!(back.general.created_at, group.general.created_at);
        assert_eq!(back.power, group.power);
        assert_eq!(back.device_ids(), group.device_ids());
    }

    #[test]
    fn state_command_is_a_single_channel() {
        let cmd = state_command(1, 128, "ff00aa");
        assert_eq!(
            cmd,
            DeviceCommand::Light(vec![LightCommand {
                rgb_hex: Some("ff00aa".to_string()),
                color_x: None,
                color_y: None,
                power: Some(1),
                dimmer: Some(128),
            }])
        );
    }
}
