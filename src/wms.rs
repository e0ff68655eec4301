//! WMS request URLs carrying an SLD document in the `SLD_BODY` parameter.
//!
//! Only the URL is produced; issuing the HTTP request is left to the caller.

use url::Url;

use crate::errors::{Result, SldError};

pub const DEFAULT_WMS_VERSION: &str = "1.1.1";
pub const DEFAULT_FORMAT: &str = "image/png";

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// `[min_x, min_y, max_x, max_y]` in `srs` units.
    pub bbox: [f64; 4],
    pub width: u32,
    pub height: u32,
    pub srs: String,
}

#[derive(Debug, Clone)]
pub struct WmsRequest {
    service_url: Url,
    version: String,
    format: String,
}

impl WmsRequest {
    pub fn new(service_url: &str) -> Result<Self> {
        let service_url = Url::parse(service_url).map_err(|source| SldError::ServiceUrl {
            url: service_url.to_string(),
            source,
        })?;
        Ok(Self {
            service_url,
            version: DEFAULT_WMS_VERSION.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        })
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn get_legend_graphic_url(&self, layer: &str, sld_body: &str) -> Url {
        let mut url = self.service_url.clone();
        url.query_pairs_mut()
            .append_pair("SERVICE", "WMS")
            .append_pair("REQUEST", "GetLegendGraphic")
            .append_pair("VERSION", &self.version)
            .append_pair("FORMAT", &self.format)
            .append_pair("LAYER", layer)
            .append_pair("SLD_BODY", sld_body);
        url
    }

    pub fn get_map_url(&self, layer: &str, sld_body: &str, view: &MapView) -> Url {
        let bbox = view
            .bbox
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut url = self.service_url.clone();
        url.query_pairs_mut()
            .append_pair("SERVICE", "WMS")
            .append_pair("REQUEST", "GetMap")
            .append_pair("VERSION", &self.version)
            .append_pair("LAYERS", layer)
            .append_pair("STYLES", "")
            .append_pair(self.crs_parameter(), &view.srs)
            .append_pair("BBOX", &bbox)
            .append_pair("WIDTH", &view.width.to_string())
            .append_pair("HEIGHT", &view.height.to_string())
            .append_pair("FORMAT", &self.format)
            .append_pair("TRANSPARENT", "true")
            .append_pair("SLD_BODY", sld_body);
        url
    }

    // WMS 1.3.0 renamed SRS to CRS.
    fn crs_parameter(&self) -> &'static str {
        if self.version.starts_with("1.3") {
            "CRS"
        } else {
            "SRS"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn rejects_unparseable_service_url() {
        let err = WmsRequest::new("not a url").unwrap_err();
        assert!(matches!(err, SldError::ServiceUrl { .. }));
    }

    #[test]
    fn legend_url_carries_sld_body() {
        let sld = r#"<sld:Name>A & B</sld:Name>"#;
        let url = WmsRequest::new("https://example.org/wms")
            .unwrap()
            .get_legend_graphic_url("MineralTenement", sld);

        let params = params(&url);
        assert_eq!(params["REQUEST"], "GetLegendGraphic");
        assert_eq!(params["VERSION"], "1.1.1");
        assert_eq!(params["FORMAT"], "image/png");
        assert_eq!(params["LAYER"], "MineralTenement");
        assert_eq!(params["SLD_BODY"], sld);
        assert!(!url.as_str().contains("A & B"));
    }

    #[test]
    fn map_url_keeps_existing_query() {
        let view = MapView {
            bbox: [110.0, -45.0, 155.5, -10.0],
            width: 256,
            height: 256,
            srs: "EPSG:4326".to_string(),
        };
        let url = WmsRequest::new("https://example.org/arcgis/services/wms?map=tenements")
            .unwrap()
            .format("image/gif")
            .get_map_url("MineralTenement", "<x/>", &view);

        let params = params(&url);
        assert_eq!(params["map"], "tenements");
        assert_eq!(params["REQUEST"], "GetMap");
        assert_eq!(params["LAYERS"], "MineralTenement");
        assert_eq!(params["STYLES"], "");
        assert_eq!(params["SRS"], "EPSG:4326");
        assert_eq!(params["BBOX"], "110,-45,155.5,-10");
        assert_eq!(params["WIDTH"], "256");
        assert_eq!(params["FORMAT"], "image/gif");
        assert_eq!(params["TRANSPARENT"], "true");
        assert_eq!(params["SLD_BODY"], "<x/>");
    }

    #[test]
    fn map_url_uses_crs_for_wms_1_3() {
        let view = MapView {
            bbox: [0.0, 0.0, 1.0, 1.0],
            width: 1,
            height: 1,
            srs: "EPSG:3857".to_string(),
        };
        let url = WmsRequest::new("https://example.org/wms")
            .unwrap()
            .version("1.3.0")
            .get_map_url("L", "<x/>", &view);

        let params = params(&url);
        assert_eq!(params["CRS"], "EPSG:3857");
        assert!(!params.contains_key("SRS"));
    }
}
