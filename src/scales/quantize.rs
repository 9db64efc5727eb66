/// Maps a continuous domain onto a fixed list of outputs by equal-width bucketing
#[derive(Debug, Clone)]
pub struct QuantizeScale<T> {
    domain: (f64, f64),
    thresholds: Vec<f64>,
    range: Vec<T>,
}

impl<T: PartialEq> QuantizeScale<T> {
    pub fn new(domain: (f64, f64), range: Vec<T>) -> Self {
        let (x0, x1) = domain;
        // n thresholds split [x0, x1] into n + 1 buckets
        let n = range.len().saturating_sub(1);
        let thresholds = (0..n)
            .map(|i| {
                let i = i as f64;
                let n = n as f64;
                ((i + 1.0) * x1 - (i - n) * x0) / (n + 1.0)
            })
            .collect();

        Self {
            domain,
            thresholds,
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> &[T] {
        &self.range
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Output for `value`; values outside the domain clamp to the first/last output
    pub fn scale(&self, value: f64) -> Option<&T> {
        if value.is_nan() {
            return None;
        }
        let bucket = self.thresholds.partition_point(|&t| t <= value);
        self.range.get(bucket)
    }

    /// Domain interval covered by `output`
    pub fn invert_extent(&self, output: &T) -> Option<(f64, f64)> {
        let i = self.range.iter().position(|o| o == output)?;
        let lo = if i == 0 {
            self.domain.0
        } else {
            self.thresholds[i - 1]
        };
        let hi = if i >= self.thresholds.len() {
            self.domain.1
        } else {
            self.thresholds[i]
        };
        Some((lo, hi))
    }
}
