use api::{Summary, MEASUREMENTS};
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

/// Display-ready strings for the four summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryFigures {
    pub total_count: String,
    pub flowrate: String,
    pub pressure: String,
    pub temperature: String,
}

impl SummaryFigures {
    /// Fails when any of the three measurement averages is absent from the payload.
    pub fn from_summary(summary: &Summary) -> anyhow::Result<Self> {
        let [flowrate, pressure, temperature] = MEASUREMENTS;
        Ok(Self {
            total_count: summary.total_count.to_string(),
            flowrate: format::format_fixed(summary.average(flowrate)?, 2),
            pressure: format::format_fixed(summary.average(pressure)?, 2),
            temperature: format::format_fixed(summary.average(temperature)?, 2),
        })
    }
}

#[component]
pub fn SummaryCards(summary: Option<Summary>) -> Element {
    let Some(summary) = summary else {
        return rsx! {};
    };

    let figures = match SummaryFigures::from_summary(&summary) {
        Ok(figures) => figures,
        Err(err) => {
            tracing::error!("cannot render summary cards: {err:#}");
            return rsx! {
                p { class: "dashboard-card__placeholder dashboard-card__placeholder--error",
                    {t!("summary-unavailable")}
                }
            };
        }
    };

    rsx! {
        div { class: "summary-cards",
            {card(t!("summary-total"), figures.total_count, "summary-card--total")}
            {card(t!("summary-avg-flowrate"), figures.flowrate, "summary-card--flowrate")}
            {card(t!("summary-avg-pressure"), figures.pressure, "summary-card--pressure")}
            {card(t!("summary-avg-temperature"), figures.temperature, "summary-card--temperature")}
        }
    }
}

fn card(label: String, value: String, modifier: &str) -> Element {
    rsx! {
        div { class: "summary-card {modifier}",
            span { class: "summary-card__label", "{label}" }
            strong { class: "summary-card__value", "{value}" }
        }
    }
}
