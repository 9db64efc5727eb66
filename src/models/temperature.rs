use serde::{Deserialize, Serialize};

/// One month/year entry as it appears in the source JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawVariance {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

/// Top-level shape of the source JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawVariance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    /// Calendar month, 1 = January
    pub month: u32,
    pub variance: f64,
    pub temperature: f64,
}

impl TemperatureRecord {
    pub fn from_raw(raw: &RawVariance, base_temperature: f64) -> Self {
        Self {
            year: raw.year,
            month: raw.month,
            variance: raw.variance,
            temperature: base_temperature + raw.variance,
        }
    }

    /// Zero-based month index as exposed on rendered cells
    pub fn month_index(&self) -> i64 {
        self.month as i64 - 1
    }

    pub fn is_valid_month(&self) -> bool {
        (1..=12).contains(&self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_is_base_plus_variance() {
        let raw = RawVariance {
            year: 1753,
            month: 1,
            variance: -1.366,
        };
        let record = TemperatureRecord::from_raw(&raw, 8.66);

        assert_eq!(record.temperature, 8.66 + -1.366);
        assert_eq!(record.year, 1753);
        assert_eq!(record.variance, -1.366);
    }

    #[test]
    fn test_month_index_is_zero_based() {
        let january = TemperatureRecord::from_raw(
            &RawVariance {
                year: 1900,
                month: 1,
                variance: 0.0,
            },
            8.0,
        );
        let december = TemperatureRecord { month: 12, ..january };

        assert_eq!(january.month_index(), 0);
        assert_eq!(december.month_index(), 11);
        assert!(december.is_valid_month());
        assert!(!TemperatureRecord { month: 13, ..january }.is_valid_month());
    }

    #[test]
    fn test_raw_dataset_deserialization() {
        let json = r#"{
            "baseTemperature": 8.66,
            "monthlyVariance": [
                {"year": 1753, "month": 1, "variance": -1.366},
                {"year": 1753, "month": 2, "variance": -2.223}
            ]
        }"#;

        let raw: RawDataset = serde_json::from_str(json).unwrap();
        assert_eq!(raw.base_temperature, 8.66);
        assert_eq!(raw.monthly_variance.len(), 2);
        assert_eq!(raw.monthly_variance[1].month, 2);
    }
}
