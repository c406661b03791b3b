//! Device profile table: canvas dimensions per device class.
//!
//! The set of device classes is closed. Unknown classes can only appear
//! at the string boundary (config, query params); once parsed into
//! `DeviceClass` the profile lookup is total and infallible.

use crate::error::ModelError;
use crate::model::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The device width template coordinates are authored at. Hydration
/// scales positions and sizes by `active_width / CANONICAL_WIDTH`.
pub const CANONICAL_WIDTH: f32 = 900.0;

/// The device class the canvas is previewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Web,
    Mobile,
}

/// Fixed canvas metrics for one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    /// Canvas dimensions in pixels.
    pub canvas: Size,
    /// Size given to a component dropped from the palette.
    pub default_component: Size,
}

impl DeviceClass {
    /// Look up the profile for this class. Total over the enum.
    pub const fn profile(self) -> DeviceProfile {
        match self {
            DeviceClass::Web => DeviceProfile {
                canvas: Size::new(900.0, 600.0),
                default_component: Size::new(150.0, 75.0),
            },
            DeviceClass::Mobile => DeviceProfile {
                canvas: Size::new(375.0, 812.0),
                default_component: Size::new(100.0, 50.0),
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DeviceClass::Web => "web",
            DeviceClass::Mobile => "mobile",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(DeviceClass::Web),
            "mobile" => Ok(DeviceClass::Mobile),
            other => Err(ModelError::UnknownDeviceClass(other.to_string())),
        }
    }
}
