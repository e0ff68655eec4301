pub mod classification;
pub mod common;
pub mod errors;
pub mod plan;
pub mod plan_execution;
pub mod sld;
pub mod wms;
pub mod xml;

pub use classification::Classification;
pub use errors::{Result, SldError};
pub use sld::{build_mineral_tenements_sld, SldBuilder, StyleRequest};
