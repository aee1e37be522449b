use leptos::*;

use crate::api;
use crate::app::{use_app_globals, ExpectGlobals};
use crate::components::{BasePageContainer, Breadcrumb, ButtonColor, ButtonState, Initialized, SimpleButton};
use crate::routing::{navigate_to, WellKnownRoutes};

#[component(transparent)]
pub fn ExploreOverview() -> impl IntoView {

    #[component]
    fn inner() -> impl IntoView {

        let globals = use_app_globals();

        let start_action = create_action(move |_: &()| {
            let server_url = globals.expect_config().server_url;
            async move {
                match api::create_explore_query(&server_url).await {
                    Ok(query) => {
                        navigate_to(WellKnownRoutes::ExploreQuery { id: query.id });
                    }
                    Err(cause) => {
                        log::error!("Could not create an explore query: {cause}");
                    }
                }
            }
        });

        let button_state = MaybeSignal::derive(move || {
            if start_action.pending().get() {
                ButtonState::Loading
            } else {
                ButtonState::Enabled
            }
        });

        let breadcrumbs = vec![
            Breadcrumb::new("Explore", "/"),
        ];

        view! {
            <BasePageContainer
                title="Explore"
                breadcrumbs=breadcrumbs
                controls=|| ()
            >
                <p class="block">
                    "Search the harvested metadata of the registered repositories. "
                    "Starting a session creates a stored query which keeps track of the data sources you select."
                </p>
                <SimpleButton
                    text="Start exploring"
                    color=ButtonColor::Success
                    state=button_state
                    on_action=move || start_action.dispatch(())
                />
            </BasePageContainer>
        }
    }

    view! {
        <Initialized>
            <Inner />
        </Initialized>
    }
}
