//! Gateway client capability
//!
//! The transport that actually talks to the gateway (DTLS session, token
//! exchange, CoAP encoding) lives behind this trait. [crate::Commands] only
//! ever sees wire model values going in and out.

use async_trait::async_trait;

use crate::models::{Ack, Device, DeviceCommand, Group};
use crate::Result;

/// Operations the facade needs from a gateway connection
///
/// Implementations report a missing id as [crate::Error::NotFound] and any
/// communication problem as [crate::Error::Transport]. Serializing access to
/// one device, if the gateway needs it, is also the implementation's job.
#[async_trait]
pub trait GatewayClient: Send + Sync + 'static {
    /// All groups, in gateway order
    async fn list_groups(&self) -> Result<Vec<Group>>;

    async fn get_group(&self, id: i64) -> Result<Group>;

    async fn get_device(&self, id: i64) -> Result<Device>;

    /// Apply a command to a device
    async fn put_device(&self, id: i64, command: &DeviceCommand) -> Result<Ack>;
}
