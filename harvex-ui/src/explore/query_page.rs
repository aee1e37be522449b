use leptos::*;
use leptos_router::use_params_map;

use harvex_client::controller::ListState;
use harvex_types::explore::QueryId;

use crate::components::{BasePageContainer, Breadcrumb, Initialized};
use crate::explore::data_sources::DataSourceList;
use crate::explore::query_panel::QueryPanel;
use crate::routing::{navigate_to, WellKnownRoutes};

#[component(transparent)]
pub fn ExploreQueryPage() -> impl IntoView {

    #[component]
    fn inner() -> impl IntoView {

        let params = use_params_map();

        let query_id = {
            let query_id = params.with_untracked(|params| {
                params.get("id").and_then(|id| QueryId::try_from(id.as_str()).ok())
            });
            match query_id {
                None => {
                    navigate_to(WellKnownRoutes::ErrorPage {
                        title: String::from("Invalid query id"),
                        text: String::from("Could not parse the provided value as a query id!"),
                        details: None,
                    });

                    QueryId::default()
                }
                Some(query_id) => {
                    query_id
                }
            }
        };

        let list_state = create_rw_signal(ListState::default());

        let breadcrumbs = vec![
            Breadcrumb::new("Explore", "/"),
            Breadcrumb::new(query_id.to_string(), format!("/explore/{query_id}")),
        ];

        view! {
            <BasePageContainer
                title="Explore Query"
                breadcrumbs=breadcrumbs
                controls=|| ()
            >
                <div class="columns">
                    <div class="column is-one-third">
                        <h2 class="subtitle is-5">"Data sources"</h2>
                        <DataSourceList query_id=query_id state=list_state />
                    </div>
                    <div class="column">
                        <QueryPanel list_state=list_state />
                    </div>
                </div>
            </BasePageContainer>
        }
    }

    view! {
        <Initialized>
            <Inner />
        </Initialized>
    }
}
