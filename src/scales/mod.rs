pub mod band;
pub mod linear;
pub mod palette;
pub mod quantize;

pub use band::BandScale;
pub use linear::LinearScale;
pub use palette::temperature_palette;
pub use quantize::QuantizeScale;

/// Legend tick values: the minimum, then `length + 1` evenly stepped values from the minimum to
/// the maximum, giving `length + 2` ticks with the minimum repeated.
pub fn legend_ticks(min: f64, max: f64, length: usize) -> Vec<f64> {
    let step = (max - min) / length as f64;
    let mut ticks = Vec::with_capacity(length + 2);
    ticks.push(min);
    for i in 0..=length {
        ticks.push(min + i as f64 * step);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_legend_ticks_keep_leading_duplicate() {
        let ticks = legend_ticks(0.0, 10.0, 10);

        assert_eq!(ticks.len(), 12);
        assert_eq!(
            ticks,
            vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn test_legend_ticks_step() {
        let ticks = legend_ticks(2.0, 4.0, 4);

        assert_eq!(ticks, vec![2.0, 2.0, 2.5, 3.0, 3.5, 4.0]);
    }
}
