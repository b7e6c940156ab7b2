use serde::{Deserialize, Serialize};

use crate::error::{TrendError, TrendResult};

/// Padding between the drawing surface edge and the inner plot region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        // Leaves room for price labels on the left and year labels below.
        Self {
            top: 8.0,
            right: 12.0,
            bottom: 22.0,
            left: 42.0,
        }
    }
}

/// The full drawing surface plus padding; all chart geometry is computed
/// against the inner plot region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: PlotPadding,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: PlotPadding::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn validate(&self) -> TrendResult<()> {
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.padding.top.is_finite()
            && self.padding.right.is_finite()
            && self.padding.bottom.is_finite()
            && self.padding.left.is_finite();
        if !finite || self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(TrendError::InvalidPlotArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.padding.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.width - self.padding.right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.padding.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.height - self.padding.bottom
    }
}
