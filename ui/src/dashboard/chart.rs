use api::Summary;
use dioxus::prelude::*;

use crate::t;

/// Legend label of the single dataset.
pub const DATASET_LABEL: &str = "Equipment Count";

/// Category labels and counts, in the order the distribution arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn from_summary(summary: &Summary) -> Self {
        let (labels, values) = summary
            .type_distribution
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .unzip();
        Self {
            label: DATASET_LABEL,
            labels,
            values,
        }
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Drawing area of the SVG chart, in view-box units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_bottom: f64,
    pub padding_top: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            padding_left: 44.0,
            padding_bottom: 48.0,
            padding_top: 16.0,
        }
    }
}

impl ChartFrame {
    fn plot_width(&self) -> f64 {
        (self.width - self.padding_left - 8.0).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - self.padding_top - self.padding_bottom).max(0.0)
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding_bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis ceiling: the largest count rounded up to a multiple of four so the
/// four grid steps land on whole numbers.
pub fn axis_max(series: &ChartSeries) -> u64 {
    let max = series.max_value().max(1);
    max.div_ceil(4) * 4
}

pub fn bar_layout(series: &ChartSeries, frame: &ChartFrame) -> Vec<BarGeometry> {
    let count = series.labels.len();
    if count == 0 {
        return Vec::new();
    }

    let slot = frame.plot_width() / count as f64;
    let bar_width = slot * 0.6;
    let ceiling = axis_max(series) as f64;

    series
        .labels
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(idx, (label, value))| {
            let height = frame.plot_height() * (*value as f64 / ceiling);
            BarGeometry {
                label: label.clone(),
                value: *value,
                x: frame.padding_left + slot * idx as f64 + (slot - bar_width) / 2.0,
                y: frame.baseline() - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

#[component]
pub fn EquipmentChart(summary: Option<Summary>) -> Element {
    let Some(summary) = summary else {
        return rsx! {};
    };

    let series = ChartSeries::from_summary(&summary);
    let frame = ChartFrame::default();
    let bars = bar_layout(&series, &frame);
    let ceiling = axis_max(&series);
    let baseline = frame.baseline();
    let plot_height = frame.plot_height();
    let right_edge = frame.width - 8.0;

    rsx! {
        figure { class: "equipment-chart",
            figcaption { class: "equipment-chart__title", {t!("chart-title")} }
            div { class: "equipment-chart__legend",
                span { class: "equipment-chart__legend-swatch" }
                span { "{series.label}" }
            }

            if bars.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("chart-empty")} }
            } else {
                svg {
                    class: "equipment-chart__canvas",
                    view_box: "0 0 {frame.width} {frame.height}",

                    for step in 0..=4u64 {
                        {
                            let y = baseline - plot_height * (step as f64 / 4.0);
                            let tick = ceiling * step / 4;
                            rsx! {
                                line {
                                    key: "grid-{step}",
                                    class: "equipment-chart__grid",
                                    x1: "{frame.padding_left}",
                                    y1: "{y}",
                                    x2: "{right_edge}",
                                    y2: "{y}",
                                }
                                text {
                                    key: "tick-{step}",
                                    class: "equipment-chart__tick",
                                    x: "{frame.padding_left - 6.0}",
                                    y: "{y + 4.0}",
                                    "text-anchor": "end",
                                    "{tick}"
                                }
                            }
                        }
                    }

                    for (idx, bar) in bars.iter().enumerate() {
                        rect {
                            key: "bar-{idx}",
                            class: "equipment-chart__bar",
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                        }
                        text {
                            key: "label-{idx}",
                            class: "equipment-chart__label",
                            x: "{bar.x + bar.width / 2.0}",
                            y: "{baseline + 16.0}",
                            "text-anchor": "middle",
                            "{bar.label}"
                        }
                    }

                    text {
                        class: "equipment-chart__axis",
                        x: "{frame.padding_left + frame.plot_width() / 2.0}",
                        y: "{frame.height - 6.0}",
                        "text-anchor": "middle",
                        {t!("chart-axis-type")}
                    }
                    text {
                        class: "equipment-chart__axis",
                        x: "12",
                        y: "{frame.padding_top + plot_height / 2.0}",
                        "text-anchor": "middle",
                        "transform": "rotate(-90 12 {frame.padding_top + plot_height / 2.0})",
                        {t!("chart-axis-count")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn summary(distribution: &[(&str, u64)]) -> Summary {
        Summary {
            total_count: distribution.iter().map(|(_, n)| n).sum(),
            averages: IndexMap::new(),
            type_distribution: distribution
                .iter()
                .map(|(label, n)| (label.to_string(), *n))
                .collect(),
        }
    }

    #[test]
    fn series_follows_distribution_order() {
        let series = ChartSeries::from_summary(&summary(&[
            ("Valve", 3),
            ("Pump", 7),
            ("Reactor", 1),
        ]));
        assert_eq!(series.labels, ["Valve", "Pump", "Reactor"]);
        assert_eq!(series.values, [3, 7, 1]);
        assert_eq!(series.label, "Equipment Count");
    }

    #[test]
    fn labels_and_values_have_equal_length() {
        for distribution in [
            vec![],
            vec![("Pump", 1)],
            vec![("Pump", 1), ("Valve", 0), ("Condenser", 12), ("Reactor", 4)],
        ] {
            let series = ChartSeries::from_summary(&summary(&distribution));
            assert_eq!(series.labels.len(), series.values.len());
            assert_eq!(series.labels.len(), distribution.len());
        }
    }

    #[test]
    fn empty_distribution_has_no_bars() {
        let series = ChartSeries::from_summary(&summary(&[]));
        assert!(bar_layout(&series, &ChartFrame::default()).is_empty());
    }

    #[test]
    fn tallest_bar_spans_plot_when_max_is_round() {
        let frame = ChartFrame::default();
        let series = ChartSeries::from_summary(&summary(&[("Pump", 8), ("Valve", 4)]));
        let bars = bar_layout(&series, &frame);

        assert_eq!(bars.len(), 2);
        assert!((bars[0].height - frame.plot_height()).abs() < 1e-9);
        assert!((bars[1].height - frame.plot_height() / 2.0).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
        assert!((bars[0].y + bars[0].height - frame.baseline()).abs() < 1e-9);
    }

    #[test]
    fn axis_ceiling_rounds_up_to_grid_steps() {
        assert_eq!(axis_max(&ChartSeries::from_summary(&summary(&[("A", 0)]))), 4);
        assert_eq!(axis_max(&ChartSeries::from_summary(&summary(&[("A", 5)]))), 8);
        assert_eq!(axis_max(&ChartSeries::from_summary(&summary(&[("A", 12)]))), 12);
    }
}
