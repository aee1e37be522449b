use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::app::{use_app_globals, ExpectGlobals};
use crate::components::{BasePageContainer, Breadcrumb, Initialized, LoadingSpinner};

#[component(transparent)]
pub fn RecordDetail() -> impl IntoView {

    #[component]
    fn inner() -> impl IntoView {

        let globals = use_app_globals();
        let params = use_params_map();

        let record_id = move || {
            params.with(|params| params.get("id").cloned()).unwrap_or_default()
        };

        let content = create_local_resource(record_id, move |record_id| {
            let server_url = globals.expect_config().server_url;
            async move {
                api::get_result(&server_url, &record_id).await
            }
        });

        let breadcrumbs = MaybeSignal::derive(move || {
            let record_id = record_id();
            vec![
                Breadcrumb::new("Explore", "/"),
                Breadcrumb::new(Clone::clone(&record_id), format!("/data/{record_id}")),
            ]
        });

        view! {
            <BasePageContainer
                title="Record"
                breadcrumbs=breadcrumbs
                controls=|| ()
            >
                <Suspense
                    fallback=LoadingSpinner
                >
                    { move || content.get().map(|content| match content {
                        Ok(content) => {
                            view! {
                                <div>
                                    <h2 class="subtitle is-5">{ content.title }</h2>
                                    <pre>{ content.content }</pre>
                                </div>
                            }.into_view()
                        }
                        Err(cause) => {
                            view! {
                                <p class="help has-text-danger">{ cause.to_string() }</p>
                            }.into_view()
                        }
                    })}
                </Suspense>
            </BasePageContainer>
        }
    }

    view! {
        <Initialized>
            <Inner />
        </Initialized>
    }
}
