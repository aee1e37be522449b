use leptos::*;
use leptos_router::use_navigate;
use log::info;
use url::Url;

use harvex_types::explore::QueryId;
pub use routes::AppRoutes as Routes;

use crate::components::BasePageContainer;

pub mod path {
    #![allow(non_upper_case_globals)]

    pub const explore_overview: &str = "/";
    pub const error: &str = "/error";
}

pub enum WellKnownRoutes {
    ExploreQuery { id: QueryId },
    ErrorPage { title: String, text: String, details: Option<String> },
}

impl WellKnownRoutes {

    fn route(&self, base: &Url) -> Url {
        match self {
            WellKnownRoutes::ExploreQuery { id } => {
                base.join(&format!("/explore/{id}"))
                    .expect("ExploreQuery route should be valid.")
            },
            WellKnownRoutes::ErrorPage { title, text, details } => {
                let mut url = base.join(path::error)
                    .expect("ErrorPage route should be valid.");
                {
                    let mut query = url.query_pairs_mut();
                    query.append_pair("title", title);
                    query.append_pair("text", text);
                    if let Some(details) = details {
                        query.append_pair("details", details);
                    }
                }
                url
            }
        }
    }
}

mod routes {
    use leptos::*;
    use leptos_router::{Route, Router, Routes};

    use crate::error::ErrorPage;
    use crate::explore::{ExploreOverview, ExploreQueryPage, RecordDetail};
    use crate::routing::{self, NotFound};

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Router>
                <main>
                    <Routes>
                        <Route path=routing::path::explore_overview view=|| view! { <ExploreOverview /> } />
                        <Route path="/explore/:id" view=|| view! { <ExploreQueryPage /> } />
                        <Route path="/data/:id" view=|| view! { <RecordDetail /> } />
                        <Route path=routing::path::error view=|| view! { <ErrorPage /> } />
                        <Route path="/*any" view=|| view! { <NotFound /> } />
                    </Routes>
                </main>
            </Router>
        }
    }
}

pub fn navigate_to(route: WellKnownRoutes) {

    let base = {
        let location = leptos_dom::helpers::location();
        Url::parse(location.origin()
            .expect("Origin of the current location should be valid.").as_str())
            .expect("Base url should be valid.")
    };

    let route = {
        let url = route.route(&base);
        let mut result = String::from(url.path());
        if let Some(query) = url.query() {
            result.push('?');
            result.push_str(query);
        }
        result
    };

    info!("Navigating to {}", route);

    let navigate = use_navigate();

    request_animation_frame(move || {
        navigate(&route, Default::default());
    });
}

#[component]
fn NotFound() -> impl IntoView {

    view! {

        <BasePageContainer
            title="Not Found"
            breadcrumbs=Vec::new()
            controls=|| ()
        >
            <p class="subtitle">"The page you are looking for does not exist."</p>
        </BasePageContainer>
    }
}
