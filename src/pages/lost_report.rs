//! Lost-report detail page for `/lost/:id`, with a link to file a sighting.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::LostReport;

#[component]
pub fn LostReportPage() -> impl IntoView {
    let remote = RemoteData::new(None);
    let params = use_params_map();

    let report = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move {
            let value = remote.send(&RequestConfig::new(api::lost_report_url(&id))).await.ok()?;
            api::decode::<LostReport>(value).ok()
        }
    });

    view! {
        <div class="lost-report-page">
            <Suspense fallback=move || view! { <p>"Loading report..."</p> }>
                {move || {
                    report.get().map(|found| match found {
                        Some(report) => {
                            let sighting_href =
                                format!("/lost-reports/{}/sighting/new", report.id);
                            view! {
                                <article class="report-details">
                                    <h1 class="report-details__title">"Lost: " {report.pet_name}</h1>
                                    {report.resolved.then(|| {
                                        view! { <p class="report-details__resolved">"Reunited"</p> }
                                    })}
                                    {report
                                        .description
                                        .map(|text| view! { <p class="report-details__description">{text}</p> })}
                                    {report
                                        .location
                                        .map(|place| view! { <p class="report-details__location">"Last seen near " {place}</p> })}
                                    {report
                                        .date_lost
                                        .map(|date| view! { <p class="report-details__date">"Missing since " {date}</p> })}
                                    <a class="btn btn--primary" href=sighting_href>
                                        "I saw this pet"
                                    </a>
                                </article>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="lost-report-page__error">
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
