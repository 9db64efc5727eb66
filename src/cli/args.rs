use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::readers::DatasetSource;
use crate::settings::Settings;
use crate::utils::constants::{FORMAT_HTML, FORMAT_SVG};

#[derive(Parser)]
#[command(name = "temperature-heatmap")]
#[command(about = "Render monthly global land-surface temperatures as a heat map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the dataset and write the heat map
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/temperature-heatmap-{YYMMDD}.{html|svg}]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Print a summary of the dataset
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(long, help = "Dataset URL [default: from settings]")]
    pub url: Option<String>,

    #[arg(
        short,
        long,
        conflicts_with = "url",
        help = "Read the dataset from a local JSON file"
    )]
    pub input: Option<PathBuf>,
}

impl SourceArgs {
    /// A local file wins, then an explicit URL, then the configured URL
    pub fn resolve(&self, settings: &Settings) -> DatasetSource {
        match (&self.input, &self.url) {
            (Some(path), _) => DatasetSource::File(path.clone()),
            (None, Some(url)) => DatasetSource::Url(url.clone()),
            (None, None) => DatasetSource::Url(settings.dataset_url.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => FORMAT_HTML,
            OutputFormat::Svg => FORMAT_SVG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["temperature-heatmap", "render"]).unwrap();

        match cli.command {
            Commands::Render {
                source,
                output,
                format,
            } => {
                assert_eq!(format, OutputFormat::Html);
                assert!(output.is_none());
                assert_eq!(
                    source.resolve(&Settings::default()),
                    DatasetSource::Url(Settings::default().dataset_url)
                );
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_render_with_file_and_svg() {
        let cli = Cli::try_parse_from([
            "temperature-heatmap",
            "--verbose",
            "render",
            "--input",
            "data.json",
            "--format",
            "svg",
            "-o",
            "out/map.svg",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Render {
                source,
                output,
                format,
            } => {
                assert_eq!(format.extension(), "svg");
                assert_eq!(output, Some(PathBuf::from("out/map.svg")));
                assert_eq!(
                    source.resolve(&Settings::default()),
                    DatasetSource::File(PathBuf::from("data.json"))
                );
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["temperature-heatmap", "info", "-c", "heatmap.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("heatmap.toml")));
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_url_and_input_conflict() {
        let result = Cli::try_parse_from([
            "temperature-heatmap",
            "info",
            "--url",
            "https://example.com/data.json",
            "--input",
            "data.json",
        ]);

        assert!(result.is_err());
    }
}
