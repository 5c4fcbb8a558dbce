//! Scored-lead table: Name, Score, Interpretation.

use leptos::prelude::*;
use wire::leads::{self, Lead};

#[component]
pub fn LeadTable(#[prop(into)] leads: Signal<Vec<Lead>>) -> impl IntoView {
    view! {
        <table class="lead-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Score"</th>
                    <th>"Interpretation"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    leads
                        .get()
                        .into_iter()
                        .map(|lead| {
                            let badge = format!(
                                "lead-table__badge lead-table__badge--{}",
                                lead.band().map_or("none", |band| band.css_modifier())
                            );
                            view! {
                                <tr>
                                    <td>{lead.name.clone()}</td>
                                    <td>{leads::format_score(lead.score)}</td>
                                    <td>
                                        <span class=badge>{lead.interpretation()}</span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
