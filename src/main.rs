use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use tenement_sld::common;
use tenement_sld::plan::StylePlan;
use tenement_sld::plan_execution;
use tenement_sld::sld::StyleRequest;
use tenement_sld::wms::WmsRequest;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single SLD document
    Build {
        #[clap(long)]
        layer: String,
        #[clap(long)]
        style: String,
        /// TenementType, TenementStatus, or empty for a uniform style
        #[clap(short, long, default_value = "")]
        classification: String,
        /// Optional path to write the document; defaults to STDOUT
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(long)]
        pretty: bool,
        /// Insert names without XML escaping
        #[clap(long)]
        verbatim: bool,
    },
    /// Write a starter style plan
    Init {
        #[clap(short, long)]
        plan: PathBuf,
    },
    /// Build every document listed in a style plan
    Run {
        #[clap(short, long)]
        plan: PathBuf,
    },
    /// Print a GetLegendGraphic URL carrying the document as SLD_BODY
    LegendUrl {
        #[clap(long)]
        service_url: String,
        #[clap(long)]
        layer: String,
        #[clap(long)]
        style: String,
        #[clap(short, long, default_value = "")]
        classification: String,
        #[clap(long)]
        wms_version: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Build {
            layer,
            style,
            classification,
            output,
            pretty,
            verbatim,
        } => {
            info!("Building style {} for layer {}", style, layer);
            let request = StyleRequest::new(layer, style, classification);
            let document = plan_execution::output_builder(request, pretty, verbatim).build()?;
            common::write_or_print(output.as_deref(), &document)?;
        }
        Commands::Init { plan } => {
            info!("Initializing plan: {}", plan.display());
            let serialized_plan = serde_yaml::to_string(&StylePlan::default())?;
            common::write_string_to_file(&plan, &serialized_plan)?;
        }
        Commands::Run { plan } => {
            info!("Running plan: {}", plan.display());
            plan_execution::execute_plan(&plan)?;
        }
        Commands::LegendUrl {
            service_url,
            layer,
            style,
            classification,
            wms_version,
        } => {
            let request = StyleRequest::new(layer.as_str(), style, classification);
            let document = plan_execution::output_builder(request, false, false).build()?;
            let mut request = WmsRequest::new(&service_url)?;
            if let Some(version) = wms_version {
                request = request.version(version);
            }
            println!("{}", request.get_legend_graphic_url(&layer, &document));
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
