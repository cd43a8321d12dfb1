//! Home page: hero actions and the latest lost-pet reports.

use leptos::prelude::*;

use crate::components::report_card::{ReportCard, ReportKind};
use crate::net::api;
use crate::net::remote_data::{RemoteData, RequestConfig};
use crate::net::types::LostReport;

/// Landing page. The report list is public; the action buttons lead into
/// guarded routes where required.
#[component]
pub fn HomePage() -> impl IntoView {
    let remote = RemoteData::new(None);

    let reports = LocalResource::new(move || async move {
        let value = remote.send(&RequestConfig::new(api::lost_reports_url())).await.ok()?;
        api::decode::<Vec<LostReport>>(value).ok()
    });

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"PawFinder"</h1>
                <p>"Lost and found pets, reported and reunited by their neighborhoods."</p>
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/lost/new">"Report a lost pet"</a>
                    <a class="btn" href="/found/new">"Report a found pet"</a>
                    <a class="btn" href="/search">"Search pets"</a>
                </div>
            </section>

            <section class="home-page__reports">
                <h2>"Recent lost pets"</h2>
                <Suspense fallback=move || view! { <p>"Loading reports..."</p> }>
                    {move || {
                        reports.get().flatten().map(|list| {
                            if list.is_empty() {
                                view! { <p class="home-page__empty">"No open reports right now."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="home-page__list">
                                        {list
                                            .into_iter()
                                            .map(|report| {
                                                view! {
                                                    <ReportCard
                                                        kind=ReportKind::Lost
                                                        id=report.id
                                                        title=report.pet_name
                                                        summary=report.description
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
