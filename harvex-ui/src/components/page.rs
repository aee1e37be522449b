use leptos::*;

use crate::components::{Breadcrumb, Breadcrumbs};

#[component]
pub fn BasePageContainer<C>(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] breadcrumbs: MaybeSignal<Vec<Breadcrumb>>,
    controls: C,
    children: Children
) -> impl IntoView
where C: IntoView + 'static {

    view! {

        <div class="container is-fluid">
            <Breadcrumbs breadcrumbs=breadcrumbs />
            <div class="hx-base-page">
                <div class="columns is-vcentered">
                    <div class="column">
                        <span class="title is-4">{ title }</span>
                    </div>
                    <div class="column is-narrow">
                        { controls }
                    </div>
                </div>
                <div class="hx-base-page-content">
                    { children() }
                </div>
            </div>
        </div>
    }
}
