use std::fmt;
use std::path::PathBuf;

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::error::{HeatmapError, Result};
use crate::models::{Dataset, RawDataset};

/// Where the temperature JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Load the dataset once and derive every record's temperature
    #[instrument(skip_all, fields(source = %source))]
    pub async fn load(&self, source: &DatasetSource) -> Result<Dataset> {
        let bytes = match source {
            DatasetSource::Url(url) => self.fetch(url).await?,
            DatasetSource::File(path) => tokio::fs::read(path).await?,
        };

        let dataset = Self::parse(&bytes)?;
        let (min_year, max_year) = dataset.year_extent();
        let (min_temp, max_temp) = dataset.temperature_extent();
        info!(records = dataset.len(), "Loaded temperature dataset");
        debug!(
            base_temperature = dataset.base_temperature,
            min_year, max_year, min_temp, max_temp, "Dataset extents"
        );

        Ok(dataset)
    }

    /// Parse the raw JSON document into a derived dataset
    pub fn parse(bytes: &[u8]) -> Result<Dataset> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        Dataset::from_raw(raw)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "Fetching dataset");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 1754, "month": 1, "variance": 0.5}
        ]
    }"#;

    #[test]
    fn test_parse_derives_temperature() {
        let dataset = DatasetLoader::parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records[0].temperature, 8.66 + -1.366);
        assert_eq!(dataset.year_extent(), (1753, 1754));
    }

    #[test]
    fn test_parse_rejects_malformed_payload() {
        let result = DatasetLoader::parse(br#"{"baseTemperature": "warm"}"#);
        assert!(matches!(result, Err(HeatmapError::Json(_))));

        let result = DatasetLoader::parse(b"not json");
        assert!(matches!(result, Err(HeatmapError::Json(_))));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"{"baseTemperature": 1.0, "extra": true,
            "monthlyVariance": [{"year": 2000, "month": 6, "variance": 0.25, "note": "x"}]}"#;

        let dataset = DatasetLoader::parse(json.as_bytes()).unwrap();
        assert_eq!(dataset.records[0].temperature, 1.25);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = DatasetLoader::new().unwrap();
        let dataset = loader
            .load(&DatasetSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.distinct_months(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let loader = DatasetLoader::new().unwrap();
        let result = loader
            .load(&DatasetSource::File(PathBuf::from("/nonexistent/data.json")))
            .await;

        assert!(matches!(result, Err(HeatmapError::Io(_))));
    }
}
