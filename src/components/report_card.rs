//! Reusable card for lost/found report list items.

use leptos::prelude::*;

/// Which report list a card belongs to; decides the badge and link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Lost,
    Found,
}

/// A clickable card linking to a report's detail page.
#[component]
pub fn ReportCard(
    kind: ReportKind,
    id: i64,
    title: String,
    summary: Option<String>,
) -> impl IntoView {
    let (label, slug) = match kind {
        ReportKind::Lost => ("Lost", "lost"),
        ReportKind::Found => ("Found", "found"),
    };
    let href = format!("/{slug}/{id}");
    let badge_class = format!("report-card__badge report-card__badge--{slug}");

    view! {
        <li class="report-card">
            <a class="report-card__link" href=href>
                <span class=badge_class>{label}</span>
                <span class="report-card__title">{title}</span>
                {summary.map(|text| view! { <span class="report-card__summary">{text}</span> })}
            </a>
        </li>
    }
}
