use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: DEFAULT_MARGIN_TOP,
            right: DEFAULT_MARGIN_RIGHT,
            bottom: DEFAULT_MARGIN_BOTTOM,
            left: DEFAULT_MARGIN_LEFT,
        }
    }
}

/// Fixed pixel geometry of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_inner_area"))]
pub struct Layout {
    #[validate(range(min = 1))]
    pub width: u32,

    #[validate(range(min = 1))]
    pub height: u32,

    #[validate(nested)]
    pub margin: Margins,

    /// Distance from the bottom of the plot to the legend swatches
    pub legend_offset: u32,

    #[validate(range(min = 1))]
    pub legend_item_size: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: Margins::default(),
            legend_offset: DEFAULT_LEGEND_OFFSET,
            legend_item_size: DEFAULT_LEGEND_ITEM_SIZE,
        }
    }
}

impl Layout {
    pub fn inner_width(&self) -> f64 {
        self.width as f64 - self.margin.left as f64 - self.margin.right as f64
    }

    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.margin.top as f64 - self.margin.bottom as f64
    }

    /// Translation applied to the plot group
    pub fn origin(&self) -> (f64, f64) {
        (self.margin.left as f64, self.margin.top as f64)
    }

    /// Y coordinate of the legend swatches, relative to the plot origin
    pub fn legend_top(&self) -> f64 {
        self.inner_height() + self.legend_offset as f64
    }

    pub fn legend_width(&self, swatches: usize) -> f64 {
        swatches as f64 * self.legend_item_size as f64
    }
}

fn validate_inner_area(layout: &Layout) -> Result<(), ValidationError> {
    if layout.inner_width() <= 0.0 || layout.inner_height() <= 0.0 {
        let mut error = ValidationError::new("inner_area");
        error.message = Some("margins leave no room for the plot".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inner_dimensions() {
        let layout = Layout::default();

        assert_eq!(layout.inner_width(), 885.0);
        assert_eq!(layout.inner_height(), 300.0);
        assert_eq!(layout.origin(), (95.0, 100.0));
        assert_eq!(layout.legend_top(), 350.0);
        assert_eq!(layout.legend_width(10), 200.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_legend_width_with_large_item_size() {
        let layout = Layout {
            legend_item_size: 500_000_000,
            ..Layout::default()
        };

        assert!(layout.validate().is_ok());
        assert_eq!(layout.legend_width(10), 5_000_000_000.0);
    }

    #[test]
    fn test_margins_wider_than_canvas_fail_validation() {
        let layout = Layout {
            width: 100,
            ..Layout::default()
        };

        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_zero_height_fails_validation() {
        let layout = Layout {
            height: 0,
            ..Layout::default()
        };

        assert!(layout.validate().is_err());
    }
}
