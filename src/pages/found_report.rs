//! Found-report detail page for `/found/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::FoundReport;

#[component]
pub fn FoundReportPage() -> impl IntoView {
    let remote = RemoteData::new(None);
    let params = use_params_map();

    let report = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move {
            let value = remote.send(&RequestConfig::new(api::found_report_url(&id))).await.ok()?;
            api::decode::<FoundReport>(value).ok()
        }
    });

    view! {
        <div class="found-report-page">
            <Suspense fallback=move || view! { <p>"Loading report..."</p> }>
                {move || {
                    report.get().map(|found| match found {
                        Some(report) => {
                            view! {
                                <article class="report-details">
                                    <h1 class="report-details__title">"Found: " {report.species}</h1>
                                    {report.resolved.then(|| {
                                        view! { <p class="report-details__resolved">"Owner found"</p> }
                                    })}
                                    {report
                                        .description
                                        .map(|text| view! { <p class="report-details__description">{text}</p> })}
                                    {report
                                        .location
                                        .map(|place| view! { <p class="report-details__location">"Found near " {place}</p> })}
                                    {report
                                        .date_found
                                        .map(|date| view! { <p class="report-details__date">"Found on " {date}</p> })}
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="found-report-page__error">
                                    {move || {
                                        remote
                                            .error
                                            .get()
                                            .map_or_else(|| "Report not found.".to_owned(), |err| err.to_string())
                                    }}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
