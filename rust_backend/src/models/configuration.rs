//! The configured product a caller asks to price.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{FinishOption, GlassOption, HardwareOption, OpeningDimensions};

/// Hardware chosen for a configuration.
///
/// The track is always present; everything else is optional. Field names
/// follow the caller's JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSelection {
    #[serde(rename = "trackType")]
    pub track: HardwareOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handles: Option<HardwareOption>,
    #[serde(rename = "softClose", default, skip_serializing_if = "Option::is_none")]
    pub soft_close: Option<HardwareOption>,
    #[serde(
        rename = "additionalHardware",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub additional: Vec<HardwareOption>,
}

/// Aggregate pricing request: one fully configured door.
///
/// Built fresh for every pricing call and never persisted here; the caller
/// owns storage of chosen configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfiguration {
    #[serde(rename = "seriesId")]
    pub series_id: String,
    pub dimensions: OpeningDimensions,
    pub finish: FinishOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<GlassOption>,
    #[serde(flatten)]
    pub hardware: HardwareSelection,
}

impl ProductConfiguration {
    /// Parse a configuration from the caller's JSON payload.
    ///
    /// On malformed input the error names the exact field path that failed,
    /// which is what the configurator surfaces to support staff.
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(input);
        let config = serde_path_to_error::deserialize(&mut deserializer)
            .context("invalid product configuration payload")?;
        Ok(config)
    }
}
