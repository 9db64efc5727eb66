use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Generate default output filename with format: temperature-heatmap-{YYMMDD}.{extension}
pub fn generate_default_output_filename(output_dir: &Path, extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "temperature-heatmap-{:02}{:02}{:02}.{}",
        year, month, day, extension
    );
    output_dir.join(filename)
}
