//! Root application component with routing, contexts, and the auth guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    add_pet::AddPetPage, create_found_report::CreateFoundReportPage,
    create_lost_report::CreateLostReportPage, create_sighting::CreateSightingPage,
    found_report::FoundReportPage, home::HomePage, logout::LogoutPage,
    lost_report::LostReportPage, pet_details::PetDetailsPage, profile::ProfilePage,
    search::SearchPage, signin::SigninPage, signup::SignupPage,
};
use crate::routes::RouteGuard;
use crate::state::session;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session into a shared context, then sets up
/// client-side routing. The view tree mirrors the declarative route table in
/// `routes.rs`; `RouteGuard` enforces its auth flags on every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::restore());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/pawfinder.css"/>
        <Title text="PawFinder"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signin") view=SigninPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=(StaticSegment("pets"), StaticSegment("new")) view=AddPetPage/>
                    <Route path=(StaticSegment("pets"), ParamSegment("id")) view=PetDetailsPage/>
                    <Route path=(StaticSegment("lost"), StaticSegment("new")) view=CreateLostReportPage/>
                    <Route path=(StaticSegment("lost"), ParamSegment("id")) view=LostReportPage/>
                    <Route path=(StaticSegment("found"), StaticSegment("new")) view=CreateFoundReportPage/>
                    <Route path=(StaticSegment("found"), ParamSegment("id")) view=FoundReportPage/>
                    <Route
                        path=(StaticSegment("lost-reports"), ParamSegment("id"), StaticSegment("sighting"), StaticSegment("new"))
                        view=CreateSightingPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
