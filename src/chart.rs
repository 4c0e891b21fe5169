// 📈 Chart Geometry - Leaf numeric utilities for the rendering layer
//
// The rendering layer itself is an external collaborator; what lives here is
// the exact coordinate math it consumes, so every frontend draws the same
// picture from the same numbers.

use crate::aggregate::{CategoryTotal, MonthlyTotal};

// ============================================================================
// LINE CHART MAPPING
// ============================================================================

/// Fixed plotting frame for the 12-month trend chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl ChartFrame {
    fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    /// Map a month index (0-11) and value into frame coordinates.
    ///
    /// x spreads the 12 months evenly across the plot width; y interpolates
    /// linearly against `max_value`, with y growing downward (screen space).
    pub fn point(&self, month: usize, value: f64, max_value: f64) -> (f64, f64) {
        let x = self.pad_left + (self.plot_width() / 11.0) * month as f64;
        let y = self.height - self.pad_bottom - (value / max_value) * self.plot_height();
        (x, y)
    }
}

/// Maximum value across both sides of the series, floored at 1 so an
/// all-zero series never divides by zero.
pub fn series_max(series: &[MonthlyTotal; 12]) -> f64 {
    series
        .iter()
        .flat_map(|m| [m.income, m.expense])
        .fold(1.0_f64, f64::max)
}

// ============================================================================
// CONIC GRADIENT (category ring)
// ============================================================================

/// Cyclic palette for the category ring, in assignment order
pub const RING_PALETTE: [&str; 7] = [
    "#FF5733", "#4CAF50", "#2196F3", "#FFC107", "#9C27B0", "#FF8C61", "#00BCD4",
];

/// Ring color when there is nothing to partition
pub const RING_NEUTRAL: &str = "#3A3F4B";

/// One colored arc of the category ring
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: &'static str,
    pub from_deg: f64,
    pub to_deg: f64,
}

/// Partition the full circle proportionally by each item's share of `total`,
/// colors cycling through the palette in item order. A non-positive total or
/// empty item list degenerates to a single neutral full circle.
pub fn conic_gradient_stops(items: &[CategoryTotal], total: f64) -> Vec<GradientStop> {
    if items.is_empty() || total <= 0.0 {
        return vec![GradientStop {
            color: RING_NEUTRAL,
            from_deg: 0.0,
            to_deg: 360.0,
        }];
    }

    let mut stops = Vec::with_capacity(items.len());
    let mut cursor = 0.0;
    for (i, item) in items.iter().enumerate() {
        let sweep = item.total / total * 360.0;
        stops.push(GradientStop {
            color: RING_PALETTE[i % RING_PALETTE.len()],
            from_deg: cursor,
            to_deg: cursor + sweep,
        });
        cursor += sweep;
    }
    stops
}
