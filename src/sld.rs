//! Styled Layer Descriptor (SLD 1.0.0) documents for the mineral tenements
//! WMS layer.
//!
//! ## Structure
//!
//! ```text
//! sld:StyledLayerDescriptor
//!   └── sld:NamedLayer
//!       ├── sld:Name                  (layer name)
//!       └── sld:UserStyle
//!           ├── sld:Name              (style name)
//!           └── sld:FeatureTypeStyle
//!               └── sld:Rule          (one or two)
//!                   ├── ogc:Filter    (absent for the default rule)
//!                   └── sld:PolygonSymbolizer
//!                       ├── sld:Fill
//!                       └── sld:Stroke
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classification::{Classification, ClassificationRule, PropertyIsEqualTo};
use crate::errors::{Result, SldError};
use crate::xml::{TextEscaping, XmlElement, XmlWriter};

pub const SLD_VERSION: &str = "1.0.0";

const NAMESPACES: [(&str, &str); 5] = [
    ("xmlns:ogc", "http://www.opengis.net/ogc"),
    ("xmlns:sld", "http://www.opengis.net/sld"),
    ("xmlns:gml", "http://www.opengis.net/gml"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    (
        "xsi:schemaLocation",
        "http://www.opengis.net/sld StyledLayerDescriptor.xsd",
    ),
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StyleRequest {
    pub layer_name: String,
    pub style_name: String,
    #[serde(default)]
    pub classification: Classification,
}

impl StyleRequest {
    pub fn new(
        layer_name: impl Into<String>,
        style_name: impl Into<String>,
        classification: impl Into<Classification>,
    ) -> Self {
        Self {
            layer_name: layer_name.into(),
            style_name: style_name.into(),
            classification: classification.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name("layer_name", &self.layer_name)?;
        validate_name("style_name", &self.style_name)
    }
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SldError::invalid_argument(field, "must not be empty"));
    }
    if let Some(c) = value.chars().find(|c| !is_xml_char(*c)) {
        return Err(SldError::invalid_argument(
            field,
            &format!("contains U+{:04X}, which XML 1.0 does not allow", c as u32),
        ));
    }
    Ok(())
}

/// XML 1.0 `Char` production. Surrogates cannot occur in a Rust `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

#[derive(Debug, Clone)]
pub struct SldBuilder {
    request: StyleRequest,
    writer: XmlWriter,
}

impl SldBuilder {
    pub fn new(request: StyleRequest) -> Self {
        Self {
            request,
            writer: XmlWriter::default(),
        }
    }

    pub fn escaping(mut self, escaping: TextEscaping) -> Self {
        self.writer = self.writer.escaping(escaping);
        self
    }

    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.writer = self.writer.indent(indent);
        self
    }

    pub fn request(&self) -> &StyleRequest {
        &self.request
    }

    /// Builds the document tree without serializing it.
    pub fn document(&self) -> Result<XmlElement> {
        self.request.validate()?;

        let rules = self.request.classification.rules();
        debug!(
            "Styling layer {} with {} rule(s) for classification {:?}",
            self.request.layer_name,
            rules.len(),
            self.request.classification
        );

        let feature_type_style =
            XmlElement::new("sld:FeatureTypeStyle").with_children(rules.iter().map(rule_element));

        let user_style = XmlElement::new("sld:UserStyle")
            .with_child(XmlElement::new("sld:Name").with_text(self.request.style_name.as_str()))
            .with_child(feature_type_style);

        let named_layer = XmlElement::new("sld:NamedLayer")
            .with_child(XmlElement::new("sld:Name").with_text(self.request.layer_name.as_str()))
            .with_child(user_style);

        let root = NAMESPACES
            .iter()
            .fold(XmlElement::new("sld:StyledLayerDescriptor"), |root, (name, value)| {
                root.with_attr(*name, *value)
            })
            .with_attr("version", SLD_VERSION)
            .with_child(named_layer);

        Ok(root)
    }

    pub fn build(&self) -> Result<String> {
        let document = self.document()?;
        Ok(self.writer.write_document(&document))
    }
}

/// Builds the SLD body used to colour mineral tenement polygons by
/// `classification_property` (`"TenementType"`, `"TenementStatus"`, or
/// anything else for a single uniform rule).
///
/// Text content is XML-escaped. Fails with [`SldError::InvalidArgument`] when
/// `layer_name` or `style_name` is empty or contains a character XML 1.0
/// forbids (C0 controls other than tab, LF and CR, U+FFFE, U+FFFF), since
/// escaping cannot represent those.
pub fn build_mineral_tenements_sld(
    layer_name: &str,
    style_name: &str,
    classification_property: &str,
) -> Result<String> {
    SldBuilder::new(StyleRequest::new(
        layer_name,
        style_name,
        classification_property,
    ))
    .build()
}

fn rule_element(rule: &ClassificationRule) -> XmlElement {
    let symbolizer = polygon_symbolizer(rule);
    match &rule.filter {
        Some(filter) => XmlElement::new("sld:Rule")
            .with_child(filter_element(filter))
            .with_child(symbolizer),
        None => XmlElement::new("sld:Rule").with_child(symbolizer),
    }
}

fn filter_element(filter: &PropertyIsEqualTo) -> XmlElement {
    XmlElement::new("ogc:Filter").with_child(
        XmlElement::new("ogc:PropertyIsEqualTo")
            .with_child(XmlElement::new("ogc:PropertyName").with_text(filter.property_name))
            .with_child(XmlElement::new("ogc:Literal").with_text(filter.literal)),
    )
}

fn polygon_symbolizer(rule: &ClassificationRule) -> XmlElement {
    let fill = XmlElement::new("sld:Fill")
        .with_child(css_parameter("fill", rule.fill_color))
        .with_child(css_parameter("fill-opacity", "1.0"));
    let stroke = XmlElement::new("sld:Stroke")
        .with_child(css_parameter("stroke", rule.stroke_color))
        .with_child(css_parameter("stroke-width", "1"));

    XmlElement::new("sld:PolygonSymbolizer")
        .with_child(fill)
        .with_child(stroke)
}

fn css_parameter(name: &str, value: &str) -> XmlElement {
    XmlElement::new("sld:CssParameter")
        .with_attr("name", name)
        .with_text(value)
}
