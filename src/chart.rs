// 📊 Survival-Rate Chart - Dynamic bar geometry
//
// The go-to-market thesis chart: one bar per funding stage (height
// proportional to the survival percentage) with fail-rate gap zones between
// consecutive stages and hover tooltips. Geometry is recomputed from the
// container's pixel size on every resize; nothing here touches layout state
// between calls.

use serde::{Deserialize, Serialize};

/// Viewport width below which the chart uses its compact bar width
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const BAR_WIDTH_DESKTOP: f64 = 55.0;
const BAR_WIDTH_MOBILE: f64 = 40.0;
const GAP_ZONE_WIDTH: f64 = 48.0;
const GAP_MIN_HEIGHT: f64 = 20.0;
const BAR_TOOLTIP_RISE: f64 = 12.0;
const GAP_TOOLTIP_OFFSET: f64 = 30.0;

// ============================================================================
// STAGE DATA
// ============================================================================

/// One funding stage on the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDatum {
    /// Stage name ("Product-Market Fit", ...)
    pub stage: String,

    /// ARR band label, empty when the stage has none
    pub arr: String,

    /// Percentage of companies surviving to this stage (0-100)
    pub survivors: f64,

    /// Percentage failing to reach this stage from the previous one;
    /// `None` for the first stage
    pub fail_rate: Option<f64>,
}

fn stage(stage: &str, arr: &str, survivors: f64, fail_rate: Option<f64>) -> StageDatum {
    StageDatum {
        stage: stage.to_string(),
        arr: arr.to_string(),
        survivors,
        fail_rate,
    }
}

/// The compiled-in four-stage dataset shown on the approach page.
pub fn default_stages() -> Vec<StageDatum> {
    vec![
        stage("Product-Market Fit", "$0-3M ARR", 100.0, None),
        stage("Go-To-Market Fit", "$3-30M ARR", 60.0, Some(40.0)),
        stage("Scale-Market Fit", "$30-100M ARR", 20.0, Some(66.0)),
        stage("$100M+ ARR", "", 3.0, Some(85.0)),
    ]
}

// ============================================================================
// LAYOUT ELEMENTS
// ============================================================================

/// A rendered bar, positioned from the chart area's bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,

    /// "N%" value label
    pub label: String,

    /// Label rendered above the bar instead of inside it (tiny last bar)
    pub label_above: bool,
}

impl Bar {
    /// Tooltip anchor: centred over the bar, clamped to the chart area, a
    /// fixed rise above the bar top. `bottom` is measured from the chart
    /// area's bottom edge.
    pub fn tooltip_anchor(&self, chart_width: f64, tooltip_width: f64) -> (f64, f64) {
        let left = self.center_x - tooltip_width / 2.0;
        let left = left.max(0.0).min(chart_width - tooltip_width);
        (left, self.height + BAR_TOOLTIP_RISE)
    }
}

/// Placement of a gap tooltip, measured from the chart area's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapTooltip {
    pub left: f64,
    pub top: f64,

    /// Tooltip flipped to the left of the gap (would overflow on the right)
    pub flipped: bool,
}

/// The drop between two consecutive bars, positioned from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct GapZone {
    /// Index of the stage this gap leads into
    pub index: usize,
    pub left: f64,
    pub width: f64,
    pub top: f64,

    /// Rendered height (raw drop clamped to a minimum)
    pub height: f64,

    /// Unclamped drop between the two bar tops
    pub raw_height: f64,
    pub center_x: f64,

    /// "N%" fail-rate pill label
    pub pill_label: String,
}

impl GapZone {
    /// Tooltip anchor beside the gap, flipped left when it would overflow.
    pub fn tooltip_anchor(
        &self,
        chart_width: f64,
        tooltip_width: f64,
        tooltip_height: f64,
    ) -> GapTooltip {
        let top = self.top + self.raw_height / 2.0 - tooltip_height / 2.0;
        let right_left = self.center_x + GAP_TOOLTIP_OFFSET;

        if right_left + tooltip_width > chart_width {
            GapTooltip {
                left: self.center_x - tooltip_width - GAP_TOOLTIP_OFFSET,
                top,
                flipped: true,
            }
        } else {
            GapTooltip {
                left: right_left,
                top,
                flipped: false,
            }
        }
    }
}

/// One x-axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub stage: String,

    /// Empty ARR bands render no sub-label
    pub arr: String,
}

// ============================================================================
// CHART LAYOUT
// ============================================================================

/// Complete pixel geometry for one render of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<Bar>,
    pub gaps: Vec<GapZone>,
    pub labels: Vec<AxisLabel>,
}

impl ChartLayout {
    pub fn is_mobile(viewport_width: f64) -> bool {
        viewport_width < MOBILE_BREAKPOINT_PX
    }

    /// Lay the chart out for a container of the given pixel size.
    ///
    /// Bar height is linear in the survival percentage:
    /// `height = survivors/100 * container_height`, exact at 0 and 100.
    pub fn build(width: f64, height: f64, viewport_width: f64, stages: &[StageDatum]) -> Self {
        let bar_width = if Self::is_mobile(viewport_width) {
            BAR_WIDTH_MOBILE
        } else {
            BAR_WIDTH_DESKTOP
        };
        let count = stages.len();
        let spacing = if count > 0 { width / count as f64 } else { 0.0 };

        let mut bars = Vec::with_capacity(count);
        let mut gaps = Vec::new();
        let mut labels = Vec::with_capacity(count);

        for (i, d) in stages.iter().enumerate() {
            let bar_height = (d.survivors / 100.0) * height;
            let center_x = spacing * i as f64 + spacing / 2.0;

            bars.push(Bar {
                index: i,
                left: center_x - bar_width / 2.0,
                width: bar_width,
                height: bar_height,
                center_x,
                label: format!("{}%", d.survivors),
                label_above: i == count - 1,
            });

            labels.push(AxisLabel {
                stage: d.stage.clone(),
                arr: d.arr.clone(),
            });
        }

        for (i, d) in stages.iter().enumerate() {
            let Some(fail_rate) = d.fail_rate else {
                continue;
            };
            if i == 0 {
                continue;
            }

            let top_of_prev = height - (stages[i - 1].survivors / 100.0) * height;
            let top_of_curr = height - (d.survivors / 100.0) * height;
            let raw_height = top_of_curr - top_of_prev;
            let center_x = (bars[i - 1].center_x + bars[i].center_x) / 2.0;

            gaps.push(GapZone {
                index: i,
                left: center_x - GAP_ZONE_WIDTH / 2.0,
                width: GAP_ZONE_WIDTH,
                top: top_of_prev,
                height: raw_height.max(GAP_MIN_HEIGHT),
                raw_height,
                center_x,
                pill_label: format!("{}%", fail_rate),
            });
        }

        ChartLayout {
            width,
            height,
            bars,
            gaps,
            labels,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
