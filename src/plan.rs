use serde::{Deserialize, Serialize};

use crate::classification::Classification;
use crate::sld::StyleRequest;

/// ## Structure
/// This module contains the data structures for the style plan file.
///
/// ```text
/// StylePlan
///   └── profiles: Vec<StyleProfile>
///       ├── filename: String
///       ├── request: StyleRequest
///       │   ├── layer_name: String
///       │   ├── style_name: String
///       │   └── classification: TenementType | TenementStatus | ""
///       ├── pretty: bool
///       └── verbatim: bool
/// ```
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StylePlan {
    pub profiles: Vec<StyleProfile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub filename: String,
    pub request: StyleRequest,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub verbatim: bool,
}

pub const DEFAULT_LAYER_NAME: &str = "MineralTenement";
pub const DEFAULT_STYLE_NAME: &str = "mineralTenementStyle";

impl Default for StylePlan {
    fn default() -> Self {
        let profile = |filename: &str, classification: Classification| StyleProfile {
            filename: filename.to_string(),
            request: StyleRequest::new(DEFAULT_LAYER_NAME, DEFAULT_STYLE_NAME, classification),
            pretty: true,
            verbatim: false,
        };

        Self {
            profiles: vec![
                profile("mineral_tenements.sld", Classification::None),
                profile("mineral_tenements_by_type.sld", Classification::TenementType),
                profile(
                    "mineral_tenements_by_status.sld",
                    Classification::TenementStatus,
                ),
            ],
        }
    }
}
