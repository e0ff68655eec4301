use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute used to colour mineral tenement polygons.
///
/// The set is closed: any property name other than the two recognised ones
/// selects [`Classification::None`], which paints every feature the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Classification {
    TenementType,
    TenementStatus,
    #[default]
    None,
}

/// `ogc:PropertyIsEqualTo` comparison selecting the features a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyIsEqualTo {
    pub property_name: &'static str,
    pub literal: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// `None` applies the rule to every feature.
    pub filter: Option<PropertyIsEqualTo>,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
}

const TENEMENT_TYPE_RULES: [ClassificationRule; 2] = [
    ClassificationRule {
        filter: Some(PropertyIsEqualTo {
            property_name: "TENTYPE",
            literal: "exploration permit",
        }),
        fill_color: "#0000FF",
        stroke_color: "#0000AA",
    },
    ClassificationRule {
        filter: Some(PropertyIsEqualTo {
            property_name: "TENTYPE",
            literal: "mining lease",
        }),
        fill_color: "#00AA00",
        stroke_color: "#00FF00",
    },
];

// "#FF66666" has seven hex digits. Existing WMS deployments render with it,
// so it is emitted as is.
const TENEMENT_STATUS_RULES: [ClassificationRule; 2] = [
    ClassificationRule {
        filter: Some(PropertyIsEqualTo {
            property_name: "TENSTATUS",
            literal: "granted",
        }),
        fill_color: "#22FF22",
        stroke_color: "#00FF00",
    },
    ClassificationRule {
        filter: Some(PropertyIsEqualTo {
            property_name: "TENSTATUS",
            literal: "application",
        }),
        fill_color: "#FF66666",
        stroke_color: "#FF0000",
    },
];

const DEFAULT_RULES: [ClassificationRule; 1] = [ClassificationRule {
    filter: None,
    fill_color: "#77DD77",
    stroke_color: "#336633",
}];

impl Classification {
    /// Maps a classification property name onto the closed set. Matching is
    /// exact; unknown names (including the empty string) yield `None`.
    pub fn parse(property: &str) -> Self {
        match property {
            "TenementType" => Classification::TenementType,
            "TenementStatus" => Classification::TenementStatus,
            _ => Classification::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::TenementType => "TenementType",
            Classification::TenementStatus => "TenementStatus",
            Classification::None => "",
        }
    }

    pub fn rules(&self) -> &'static [ClassificationRule] {
        match self {
            Classification::TenementType => &TENEMENT_TYPE_RULES,
            Classification::TenementStatus => &TENEMENT_STATUS_RULES,
            Classification::None => &DEFAULT_RULES,
        }
    }
}

impl From<&str> for Classification {
    fn from(property: &str) -> Self {
        Classification::parse(property)
    }
}

impl From<String> for Classification {
    fn from(property: String) -> Self {
        Classification::parse(&property)
    }
}

impl From<Classification> for String {
    fn from(classification: Classification) -> Self {
        classification.as_str().to_string()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
