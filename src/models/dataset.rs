use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{HeatmapError, Result};
use crate::models::{RawDataset, TemperatureRecord};

/// Immutable, fully derived temperature dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub base_temperature: f64,
    pub records: Vec<TemperatureRecord>,
}

impl Dataset {
    pub fn from_raw(raw: RawDataset) -> Result<Self> {
        if raw.monthly_variance.is_empty() {
            return Err(HeatmapError::MissingData(
                "dataset contains no monthly variance entries".to_string(),
            ));
        }

        let records = raw
            .monthly_variance
            .iter()
            .map(|entry| TemperatureRecord::from_raw(entry, raw.base_temperature))
            .collect();

        Ok(Self {
            base_temperature: raw.base_temperature,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inclusive `[min_year, max_year]`
    pub fn year_extent(&self) -> (i32, i32) {
        let mut iter = self.records.iter().map(|r| r.year);
        let first = iter.next().unwrap_or_default();
        iter.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)))
    }

    /// Inclusive `[min_temp, max_temp]` over the derived temperatures
    pub fn temperature_extent(&self) -> (f64, f64) {
        float_extent(self.records.iter().map(|r| r.temperature))
    }

    pub fn variance_extent(&self) -> (f64, f64) {
        float_extent(self.records.iter().map(|r| r.variance))
    }

    /// Distinct years in first-occurrence order
    pub fn distinct_years(&self) -> Vec<i32> {
        distinct(self.records.iter().map(|r| r.year))
    }

    /// Distinct months in first-occurrence order
    pub fn distinct_months(&self) -> Vec<u32> {
        distinct(self.records.iter().map(|r| r.month))
    }

    pub fn summary(&self) -> DatasetSummary {
        let warmest = self
            .records
            .iter()
            .copied()
            .max_by(|a, b| a.temperature.total_cmp(&b.temperature));
        let coldest = self
            .records
            .iter()
            .copied()
            .min_by(|a, b| a.temperature.total_cmp(&b.temperature));

        DatasetSummary {
            record_count: self.len(),
            base_temperature: self.base_temperature,
            year_extent: self.year_extent(),
            distinct_years: self.distinct_years().len(),
            temperature_extent: self.temperature_extent(),
            variance_extent: self.variance_extent(),
            invalid_months: self.records.iter().filter(|r| !r.is_valid_month()).count(),
            warmest,
            coldest,
        }
    }
}

/// Min/max ignoring NaN, the way an extent over trusted data behaves
fn float_extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut extent: Option<(f64, f64)> = None;
    for value in values.filter(|v| !v.is_nan()) {
        extent = Some(match extent {
            None => (value, value),
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
        });
    }
    extent.unwrap_or((0.0, 0.0))
}

fn distinct<T: Copy + Eq + std::hash::Hash>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub base_temperature: f64,
    pub year_extent: (i32, i32),
    pub distinct_years: usize,
    pub temperature_extent: (f64, f64),
    pub variance_extent: (f64, f64),
    /// Records whose month lies outside 1..=12; they are still rendered
    pub invalid_months: usize,
    pub warmest: Option<TemperatureRecord>,
    pub coldest: Option<TemperatureRecord>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Summary")?;
        writeln!(f, "===============")?;
        writeln!(f, "Records: {}", self.record_count)?;
        writeln!(f, "Base temperature: {}℃", self.base_temperature)?;
        writeln!(
            f,
            "Years: {} to {} ({} distinct)",
            self.year_extent.0, self.year_extent.1, self.distinct_years
        )?;
        writeln!(
            f,
            "Temperature range: {:.1}℃ to {:.1}℃",
            self.temperature_extent.0, self.temperature_extent.1
        )?;
        write!(
            f,
            "Variance range: {:.1}℃ to {:.1}℃",
            self.variance_extent.0, self.variance_extent.1
        )?;
        if self.invalid_months > 0 {
            write!(f, "\nRecords with invalid month: {}", self.invalid_months)?;
        }
        if let Some(warmest) = &self.warmest {
            write!(
                f,
                "\nWarmest month: {}-{:02} at {:.1}℃",
                warmest.year, warmest.month, warmest.temperature
            )?;
        }
        if let Some(coldest) = &self.coldest {
            write!(
                f,
                "\nColdest month: {}-{:02} at {:.1}℃",
                coldest.year, coldest.month, coldest.temperature
            )?;
        }
        Ok(())
    }
}
