pub mod dataset;
pub mod layout;
pub mod temperature;

pub use dataset::{Dataset, DatasetSummary};
pub use layout::{Layout, Margins};
pub use temperature::{RawDataset, RawVariance, TemperatureRecord};
