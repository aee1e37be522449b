use leptos::*;

use crate::app::use_app_globals;
use crate::components::LoadingSpinner;

/// Renders its children once the application globals have been fetched.
#[component]
pub fn Initialized(children: ChildrenFn) -> impl IntoView {

    let globals = use_app_globals();
    let children = store_value(children);

    view! {
        <Suspense fallback=LoadingSpinner>
            { move || globals.get().map(|globals| match globals {
                Ok(_) => children.with_value(|children| children().into_view()),
                Err(cause) => view! {
                    <p class="title is-5 has-text-centered">{ cause.to_string() }</p>
                }.into_view(),
            }) }
        </Suspense>
    }
}
