use crate::errors;
use crate::plan::{StylePlan, StyleProfile};
use crate::sld::{SldBuilder, StyleRequest};
use crate::xml::TextEscaping;
use tracing::{debug, info};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const PRETTY_INDENT: usize = 2;

/// Builder configured with the output options shared by plan profiles and
/// the CLI.
pub fn output_builder(request: StyleRequest, pretty: bool, verbatim: bool) -> SldBuilder {
    let escaping = if verbatim {
        TextEscaping::Verbatim
    } else {
        TextEscaping::Escape
    };
    SldBuilder::new(request)
        .escaping(escaping)
        .indent(pretty.then_some(PRETTY_INDENT))
}

pub fn load_plan(plan_file_path: &Path) -> errors::Result<StylePlan> {
    let path_content = std::fs::read_to_string(plan_file_path)?;
    let plan: StylePlan = serde_yaml::from_str(&path_content)?;
    Ok(plan)
}

pub fn render_profile(profile: &StyleProfile) -> Result<String> {
    let document = output_builder(profile.request.clone(), profile.pretty, profile.verbatim)
        .build()
        .with_context(|| format!("building {}", profile.filename))?;
    Ok(document)
}

/// Builds every profile of the plan and writes the documents next to the
/// plan file. Returns the written paths in profile order.
pub fn execute_plan(plan: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    info!("Executing plan");

    let plan_file_path = plan.as_ref();
    let plan = load_plan(plan_file_path)
        .with_context(|| format!("loading style plan {}", plan_file_path.display()))?;
    debug!("Executing plan: {:?}", plan);

    let base_dir = plan_file_path.parent().unwrap_or_else(|| Path::new(""));

    let mut written = Vec::with_capacity(plan.profiles.len());
    for profile in &plan.profiles {
        info!(
            "Exporting file: {} for layer {} ({:?})",
            profile.filename, profile.request.layer_name, profile.request.classification
        );
        let output = render_profile(profile)?;
        let output_path = base_dir.join(&profile.filename);
        super::common::write_string_to_file(&output_path, &output)
            .with_context(|| format!("writing {}", output_path.display()))?;
        written.push(output_path);
    }

    info!("Plan produced {} document(s)", written.len());
    Ok(written)
}
