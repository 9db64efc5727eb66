use std::path::Path;
use std::sync::Mutex;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::error::{HeatmapError, Result};
use crate::models::Dataset;
use crate::readers::{DatasetLoader, DatasetSource};
use crate::render::RenderContext;
use crate::settings::Settings;
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{HtmlWriter, SvgWriter};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            source,
            output,
            format,
        } => {
            let source = source.resolve(&settings);
            let dataset = load_dataset(&source).await?;

            let context = RenderContext::new(dataset, settings.layout);
            let output_file = output.unwrap_or_else(|| {
                generate_default_output_filename(&settings.output_dir, format.extension())
            });

            // Create output directory if it doesn't exist
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            match format {
                OutputFormat::Html => {
                    HtmlWriter::new(settings.tooltip.clone()).write(&context, &output_file)?
                }
                OutputFormat::Svg => SvgWriter::new().write(&context, &output_file)?,
            }

            println!(
                "Rendered {} cells to {}",
                context.dataset().len(),
                output_file.display()
            );
        }

        Commands::Info { source } => {
            let source = source.resolve(&settings);
            let dataset = load_dataset(&source).await?;

            println!("\n{}", dataset.summary());
        }
    }

    Ok(())
}

/// Fetch once; on failure log it and render nothing
async fn load_dataset(source: &DatasetSource) -> Result<Dataset> {
    let progress = ProgressReporter::new_spinner(&format!("Loading {}", source), false);
    let loader = DatasetLoader::new()?;

    match loader.load(source).await {
        Ok(dataset) => {
            progress.finish_with_message(&format!("Loaded {} records", dataset.len()));
            Ok(dataset)
        }
        Err(e) => {
            progress.abandon();
            error!(source = %source, error = %e, "Failed to load dataset, nothing rendered");
            Err(e)
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| HeatmapError::Logging(e.to_string()))?;
    info!(verbose, "Logging initialised");
    Ok(())
}
