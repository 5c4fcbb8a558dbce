//! SVG bar chart of lead scores.
//!
//! DESIGN
//! ======
//! Geometry is computed by `chart_bars` so layout is testable without a
//! DOM. Bars scale against 100 or the highest score, whichever is larger;
//! unscored leads get a zero-height slot so names stay aligned with the
//! table.

#[cfg(test)]
#[path = "lead_chart_test.rs"]
mod lead_chart_test;

use leptos::prelude::*;
use wire::leads::{self, Lead};

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 240.0;
const GAP: f64 = 8.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub class: String,
}

/// Lay out one bar per lead within a `width` x `height` plot.
pub fn chart_bars(leads: &[Lead], width: f64, height: f64) -> Vec<Bar> {
    if leads.is_empty() {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let count = leads.len() as f64;
    let slot = width / count;
    let bar_width = (slot - GAP).max(1.0);
    let ceiling = leads::max_score(leads).max(100.0);

    leads
        .iter()
        .enumerate()
        .map(|(i, lead)| {
            let score = lead.score.unwrap_or(0.0).max(0.0);
            let bar_height = height * score / ceiling;
            let modifier = lead.band().map_or("none", |band| band.css_modifier());
            #[allow(clippy::cast_precision_loss)]
            let x = slot * i as f64 + GAP / 2.0;
            Bar {
                x,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
                label: format!("{}: {}", lead.name, leads::format_score(lead.score)),
                class: format!("lead-chart__bar lead-chart__bar--{modifier}"),
            }
        })
        .collect()
}

#[component]
pub fn LeadChart(#[prop(into)] leads: Signal<Vec<Lead>>) -> impl IntoView {
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    view! {
        <svg class="lead-chart" viewBox=view_box preserveAspectRatio="none" role="img">
            {move || {
                chart_bars(&leads.get(), CHART_WIDTH, CHART_HEIGHT)
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <rect
                                class=bar.class
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                aria-label=bar.label
                            ></rect>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
