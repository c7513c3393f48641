//! In-memory gateway backed by a wire format JSON snapshot

use std::{fs, path::Path, sync::Mutex, sync::MutexGuard};

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    client::GatewayClient,
    models::{Ack, Device, DeviceCommand, Group},
    Error, Result,
};

/// Gateway state in wire format: `{"groups": [...], "devices": [...]}`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub groups: Vec<Group>,
    pub devices: Vec<Device>,
}

/// In-memory [GatewayClient] seeded from a [Snapshot]
///
/// Stands in for a real gateway connection when running offline or in
/// tests. Commands are applied to the stored devices so a following GET
/// reflects them; nothing is written back to disk.
///
/// # Examples
///
/// ```
/// use tradfri_rest::FixtureGateway;
///
/// let gateway = FixtureGateway::from_json(r#"{"devices": [{"9003": 65537}]}"#).unwrap();
/// assert_eq!(gateway.snapshot().unwrap().devices.len(), 1);
/// ```
///
pub struct FixtureGateway {
    state: Mutex<Snapshot>,
}

impl FixtureGateway {
    /// A gateway with no groups and no devices
    pub fn empty() -> Self {
        Self::new(Snapshot::default())
    }

    pub fn new(snapshot: Snapshot) -> Self {
        FixtureGateway {
            state: Mutex::new(snapshot),
        }
    }

    /// Parse a snapshot from wire format JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content).map_err(Error::JsonLoad)?;
        Ok(Self::new(snapshot))
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io("read", e))?;
        let gateway = Self::from_json(&content)?;
        if let Ok(state) = gateway.lock() {
            info!(
                "loaded {} groups and {} devices from {}",
                state.groups.len(),
                state.devices.len(),
                path.display()
            );
        }
        Ok(gateway)
    }

    /// Load a snapshot file, starting empty if it is missing or invalid
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(gateway) => gateway,
            Err(e) => {
                warn!("Failed to load gateway snapshot {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Snapshot>> {
        self.state
            .lock()
            .map_err(|_| Error::Transport("fixture state poisoned".to_string()))
    }
}

/// Copy every set field of a command onto the matching channel
fn apply(device: &mut Device, command: &DeviceCommand) -> Result<()> {
    let id = device.general.id;
    match command {
        DeviceCommand::Light(cmds) => {
            if device.light_control.is_empty() {
                return Err(Error::Transport(format!("device {id} has no light control")));
            }
            for (channel, cmd) in device.light_control.iter_mut().zip(cmds) {
                if let Some(rgb) = &cmd.rgb_hex {
                    channel.rgb_hex = rgb.clone();
                }
                if let Some(x) = cmd.color_x {
                    channel.color_x = x;
                }
                if let Some(y) = cmd.color_y {
                    channel.color_y = y;
                }
                if let Some(power) = cmd.power {
                    channel.power = power;
                }
                if let Some(dimmer) = cmd.dimmer {
                    channel.dimmer = dimmer;
                }
            }
        }
        DeviceCommand::Blind(cmds) => {
            if device.blind_control.is_empty() {
                return Err(Error::Transport(format!("device {id} has no blind control")));
            }
            for (channel, cmd) in device.blind_control.iter_mut().zip(cmds) {
                if let Some(position) = cmd.position {
                    channel.position = position;
                }
            }
        }
    }
    Ok(())
}

#[async_trait]
impl GatewayClient for FixtureGateway {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        Ok(self.lock()?.groups.clone())
    }

    async fn get_group(&self, id: i64) -> Result<Group> {
        self.lock()?
            .groups
            .iter()
            .find(|g| g.general.id == id)
            .cloned()
            .ok_or_else(|| Error::group_not_found(id))
    }

    async fn get_device(&self, id: i64) -> Result<Device> {
        self.lock()?
            .devices
            .iter()
            .find(|d| d.general.id == id)
            .cloned()
            .ok_or_else(|| Error::device_not_found(id))
    }

    async fn put_device(&self, id: i64, command: &DeviceCommand) -> Result<Ack> {
        let mut state = self.lock()?;
        let device = state
            .devices
            .iter_mut()
            .find(|d| d.general.id == id)
            .ok_or_else(|| Error::device_not_found(id))?;

        let body = serde_json::to_string(command).map_err(Error::JsonDump)?;
        debug!("fixture PUT /15001/{id} {body}");

        apply(device, command)?;
        Ok(Ack::new(&format!("device {id} updated")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate;

    const SNAPSHOT: &str = r#"{
        "groups": [
            {"9001": "Living room", "9002": 1550000000, "9003": 131073, "5850": 1,
             "9018": {"15002": {"9003": [65537, 65550]}}}
        ],
        "devices": [
            {"9001": "Ceiling", "9003": 65537, "3": {"0": "IKEA of Sweden"},
             "3311": [{"5706": "f1e0b5", "5850": 0, "5851": 10, "9003": 0}]},
            {"9001": "Blind", "9003": 65550, "3": {"9": 80},
             "15015": [{"5536": 0.0, "9003": 0}]}
        ]
    }"#;

    #[actix_web::test]
    async fn lookups() {
        let gateway = FixtureGateway::from_json(SNAPSHOT).unwrap();

        assert_eq!(gateway.list_groups().await.unwrap().len(), 1);
        assert_eq!(
            gateway.get_group(131073).await.unwrap().device_ids(),
            &[65537, 65550]
        );
        assert_eq!(
            gateway.get_device(1).await.unwrap_err(),
            Error::device_not_found(1)
        );
        assert_eq!(
            gateway.get_group(1).await.unwrap_err(),
            Error::group_not_found(1)
        );
    }

    #[actix_web::test]
    async fn commands_update_state() {
        let gateway = FixtureGateway::from_json(SNAPSHOT).unwrap();

        gateway
            .put_device(65537, &translate::state_command(1, 200, "ff00aa"))
            .await
            .unwrap();
        let light = &gateway.get_device(65537).await.unwrap().light_control[0];
        assert_eq!(light.rgb_hex, "ff00aa");
        assert_eq!(light.power, 1);
        assert_eq!(light.dimmer, 200);

        gateway
            .put_device(65550, &translate::position_command(75.0))
            .await
            .unwrap();
        let blind = gateway.get_device(65550).await.unwrap();
        assert_eq!(blind.blind_control[0].position, 75.0);
    }

    #[actix_web::test]
    async fn mismatched_command_is_refused() {
        let gateway = FixtureGateway::from_json(SNAPSHOT).unwrap();
        assert!(matches!(
            gateway
                .put_device(65550, &translate::power_command(1))
                .await,
            Err(Error::Transport(_))
        ));
        assert!(matches!(
            gateway
                .put_device(9, &translate::power_command(1))
                .await,
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn invalid_json_is_a_load_error() {
        assert!(matches!(
            FixtureGateway::from_json("{"),
            Err(Error::JsonLoad(_))
        ));
    }
}
