use std::collections::HashMap;
use std::hash::Hash;

/// Maps discrete values onto equal, contiguous pixel bands with no padding
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
}

impl<T: Copy + Eq + Hash> BandScale<T> {
    /// Build a scale over the distinct values of `values`, keeping first-occurrence order
    pub fn new(values: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for value in values {
            if !index.contains_key(&value) {
                index.insert(value, domain.len());
                domain.push(value);
            }
        }

        Self {
            domain,
            index,
            range,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Start of the band for `value`, or `None` if it is not in the domain
    pub fn scale(&self, value: T) -> Option<f64> {
        self.index
            .get(&value)
            .map(|&i| self.range.0 + i as f64 * self.step())
    }

    /// Centre of the band for `value`
    pub fn center(&self, value: T) -> Option<f64> {
        self.scale(value).map(|start| start + self.bandwidth() / 2.0)
    }
}
