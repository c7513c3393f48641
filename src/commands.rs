//! Command facade driven by the HTTP routes
//!
//! Every operation validates its REST-origin arguments first, so a rejected
//! request never reaches the gateway, then issues exactly one gateway call
//! (or one per group member for the group fan-outs) under the configured
//! deadline. Nothing is retried, batched or deduplicated.

use std::{future::Future, sync::Arc, time::Duration};

use actix_web::rt::time::timeout;
use log::{debug, error, warn};

use crate::{
    client::GatewayClient,
    models::{Ack, Device, DeviceCommand, Group},
    translate::{self, DeviceKind},
    Error, Result,
};

/// Operation surface over an injected [GatewayClient]
///
/// Cheap to clone; clones share the client.
///
/// # Examples
///
/// ```
/// use std::{sync::Arc, time::Duration};
/// use tradfri_rest::{Commands, FixtureGateway};
///
/// let commands = Commands::new(Arc::new(FixtureGateway::empty()), Duration::from_secs(5));
/// assert_eq!(commands.deadline(), Duration::from_secs(5));
/// ```
///
#[derive(Clone)]
pub struct Commands {
    client: Arc<dyn GatewayClient>,
    deadline: Duration,
}

impl Commands {
    /// Create a new facade; `deadline` bounds every single gateway call
    pub fn new(client: Arc<dyn GatewayClient>, deadline: Duration) -> Self {
        Commands { client, deadline }
    }

    /// Accessor for the per-call deadline
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Run one gateway call, aborting it once the deadline passes
    async fn call<T>(&self, what: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
        let res = match timeout(self.deadline, fut).await {
            Ok(res) => res,
            Err(_) => Err(Error::Timeout(self.deadline)),
        };
        match &res {
            Err(Error::NotFound { .. }) => debug!("{what}: not found"),
            Err(e) => error!("{what} failed: {e}"),
            Ok(_) => {}
        }
        res
    }

    /// Fetch all groups, in gateway order
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        debug!("listing groups");
        self.call("list groups", self.client.list_groups()).await
    }

    /// Fetch one group
    pub async fn get_group(&self, id: i64) -> Result<Group> {
        debug!("fetching group {id}");
        self.call("get group", self.client.get_group(id)).await
    }

    /// Fetch one device
    pub async fn get_device(&self, id: i64) -> Result<Device> {
        debug!("fetching device {id}");
        let device = self.call("get device", self.client.get_device(id)).await?;
        debug!("device {id} is a {}", DeviceKind::of(&device).label());
        Ok(device)
    }

    /// Member ids of a group, in group order
    pub async fn device_ids_on_group(&self, id: i64) -> Result<Vec<i64>> {
        Ok(self.get_group(id).await?.device_ids().to_vec())
    }

    /// Fetch every member device of a group, in group order
    ///
    /// Fail fast: the first member that cannot be fetched aborts the whole
    /// listing with that member's error. No partial list is produced.
    pub async fn devices_on_group(&self, id: i64) -> Result<Vec<Device>> {
        let group = self.get_group(id).await?;
        let mut devices = Vec::with_capacity(group.device_ids().len());
        for device_id in group.device_ids() {
            devices.push(self.get_device(*device_id).await?);
        }
        Ok(devices)
    }

    /// Set the CIE 1931 chromaticity of a light
    pub async fn put_device_color_xy(&self, id: i64, x: i32, y: i32) -> Result<Ack> {
        if x < 0 || y < 0 {
            return Err(reject(format!(
                "color coordinates must not be negative: {x},{y}"
            )));
        }
        self.dispatch(id, translate::color_xy_command(x, y)).await
    }

    /// Set the color of a light from a 6 digit hex string
    pub async fn put_device_color_rgb(&self, id: i64, rgb: &str) -> Result<Ack> {
        validate_rgb(rgb)?;
        self.dispatch(id, translate::rgb_command(rgb)).await
    }

    /// Set the dimmer level of a light
    ///
    /// The upper bound is device specific and left to the gateway.
    pub async fn put_device_dimming(&self, id: i64, level: i32) -> Result<Ack> {
        validate_dimmer(level)?;
        self.dispatch(id, translate::dimmer_command(level)).await
    }

    /// Turn a light on (1) or off (0)
    pub async fn put_device_power(&self, id: i64, power: i32) -> Result<Ack> {
        validate_power(power)?;
        self.dispatch(id, translate::power_command(power)).await
    }

    /// Set power, dimmer and color of a light in one command
    pub async fn put_device_state(
        &self,
        id: i64,
        power: i32,
        dimmer: i32,
        rgb: &str,
    ) -> Result<Ack> {
        validate_power(power)?;
        validate_dimmer(dimmer)?;
        validate_rgb(rgb)?;
        self.dispatch(id, translate::state_command(power, dimmer, rgb)).await
    }

    /// Move a blind to a position between 0 and 100
    pub async fn put_device_positioning(&self, id: i64, position: f32) -> Result<Ack> {
        if !(0.0..=100.0).contains(&position) {
            return Err(reject(format!("position must be within 0-100: {position}")));
        }
        self.dispatch(id, translate::position_command(position)).await
    }

    async fn dispatch(&self, id: i64, command: DeviceCommand) -> Result<Ack> {
        debug!("device {id} <- {command:?}");
        self.call("put device", self.client.put_device(id, &command)).await
    }
}

fn reject(reason: String) -> Error {
    warn!("rejected: {reason}");
    Error::InvalidArgument(reason)
}

/// Check for exactly six hex digits, no leading `#`
///
/// # Examples
///
/// ```
/// use tradfri_rest::commands::validate_rgb;
///
/// assert!(validate_rgb("ff00aa").is_ok());
/// assert!(validate_rgb("FF00AA").is_ok());
/// assert!(validate_rgb("#ff00aa").is_err());
/// assert!(validate_rgb("ff00a").is_err());
/// assert!(validate_rgb("gg00aa").is_err());
/// ```
///
pub fn validate_rgb(rgb: &str) -> Result<()> {
    if rgb.len() == 6 && rgb.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(reject(format!("rgb color must be 6 hex digits: {rgb:?}")))
    }
}

/// Power must be exactly 0 or 1
pub fn validate_power(power: i32) -> Result<()> {
    match power {
        0 | 1 => Ok(()),
        _ => Err(reject(format!("power must be 0 or 1: {power}"))),
    }
}

/// Dimmer must not be negative
pub fn validate_dimmer(level: i32) -> Result<()> {
    if level < 0 {
        Err(reject(format!("dimmer must not be negative: {level}")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use actix_web::rt::time::sleep;
    use async_trait::async_trait;

    use super::*;

    /// Counts calls; fails or stalls on demand
    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
        stall: bool,
    }

    impl CountingClient {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn tick(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.stall {
                sleep(Duration::from_secs(30)).await;
            }
            Ok(())
        }
    }

    #[async_trait]
    impl GatewayClient for CountingClient {
        async fn list_groups(&self) -> Result<Vec<Group>> {
            self.tick().await?;
            Ok(Vec::new())
        }

        async fn get_group(&self, id: i64) -> Result<Group> {
            self.tick().await?;
            Err(Error::group_not_found(id))
        }

        async fn get_device(&self, _id: i64) -> Result<Device> {
            self.tick().await?;
            Err(Error::Transport("connection reset".to_string()))
        }

        async fn put_device(&self, _id: i64, _command: &DeviceCommand) -> Result<Ack> {
            self.tick().await?;
            Ok(Ack::new("ok"))
        }
    }

    fn commands(client: &Arc<CountingClient>) -> Commands {
        let client: Arc<dyn GatewayClient> = client.clone();
        Commands::new(client, Duration::from_millis(50))
    }

    #[actix_web::test]
    async fn invalid_rgb_never_dispatched() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        for bad in ["", "ff00a", "ff00aa0", "#ff00a", "zz00aa", "ff 0aa"] {
            let err = commands.put_device_color_rgb(42, bad).await.unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{bad:?}");
        }
        assert_eq!(client.calls(), 0);

        commands.put_device_color_rgb(42, "ff00aa").await.unwrap();
        assert_eq!(client.calls(), 1);
    }

    #[actix_web::test]
    async fn power_accepts_only_zero_and_one() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        for bad in [-1, 2, 255, i32::MIN, i32::MAX] {
            assert!(matches!(
                commands.put_device_power(42, bad).await,
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(client.calls(), 0);

        commands.put_device_power(42, 0).await.unwrap();
        commands.put_device_power(42, 1).await.unwrap();
        assert_eq!(client.calls(), 2);
    }

    #[actix_web::test]
    async fn position_bounds() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        for bad in [-0.1, 100.01, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                commands.put_device_positioning(42, bad).await,
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(client.calls(), 0);

        commands.put_device_positioning(42, 0.0).await.unwrap();
        commands.put_device_positioning(42, 100.0).await.unwrap();
        assert_eq!(client.calls(), 2);
    }

    #[actix_web::test]
    async fn dimmer_rejects_negative_only() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        assert!(commands.put_device_dimming(42, -1).await.is_err());
        commands.put_device_dimming(42, 0).await.unwrap();
        commands.put_device_dimming(42, 300).await.unwrap();
        assert_eq!(client.calls(), 2);
    }

    #[actix_web::test]
    async fn state_validates_every_field() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        assert!(commands.put_device_state(42, 2, 10, "ff00aa").await.is_err());
        assert!(commands.put_device_state(42, 1, -5, "ff00aa").await.is_err());
        assert!(commands.put_device_state(42, 1, 10, "red").await.is_err());
        assert_eq!(client.calls(), 0);

        commands.put_device_state(42, 1, 10, "ff00aa").await.unwrap();
        assert_eq!(client.calls(), 1);
    }

    #[actix_web::test]
    async fn errors_propagate_unchanged() {
        let client = Arc::new(CountingClient::default());
        let commands = commands(&client);

        assert_eq!(
            commands.get_group(7).await.unwrap_err(),
            Error::group_not_found(7)
        );
        assert_eq!(
            commands.get_device(1).await.unwrap_err(),
            Error::Transport("connection reset".to_string())
        );
    }

    #[actix_web::test]
    async fn stalled_call_times_out() {
        let client = Arc::new(CountingClient {
            stall: true,
            ..Default::default()
        });
        let commands = commands(&client);

        assert_eq!(
            commands.list_groups().await.unwrap_err(),
            Error::Timeout(Duration::from_millis(50))
        );
        assert_eq!(client.calls(), 1);
    }
}
