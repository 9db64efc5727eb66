use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::Layout;
use crate::utils::constants::*;

pub const ENV_PREFIX: &str = "HEATMAP";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TooltipSettings {
    pub fade_ms: u64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub opacity: f64,

    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            fade_ms: TOOLTIP_FADE_MS,
            opacity: TOOLTIP_VISIBLE_OPACITY,
            offset_x: TOOLTIP_OFFSET_X,
            offset_y: TOOLTIP_OFFSET_Y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate(url)]
    pub dataset_url: String,

    pub output_dir: PathBuf,

    #[validate(nested)]
    pub layout: Layout,

    #[validate(nested)]
    pub tooltip: TooltipSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            layout: Layout::default(),
            tooltip: TooltipSettings::default(),
        }
    }
}

impl Settings {
    /// Layer defaults, an optional settings file and `HEATMAP_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
