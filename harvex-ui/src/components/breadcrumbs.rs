use leptos::*;

#[derive(Debug, Clone)]
pub struct Breadcrumb {
    pub text: String,
    pub href: String,
}

impl Breadcrumb {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

#[component]
pub fn Breadcrumbs(
    #[prop(into)] breadcrumbs: MaybeSignal<Vec<Breadcrumb>>,
) -> impl IntoView {

    let items = move || breadcrumbs.with(|breadcrumbs| {
        let last = breadcrumbs.len().saturating_sub(1);
        breadcrumbs.iter()
            .enumerate()
            .map(|(index, breadcrumb)| {
                let text = Clone::clone(&breadcrumb.text);
                let href = Clone::clone(&breadcrumb.href);
                view! { <Item text href is_active={ index == last } /> }
            })
            .collect::<Vec<_>>()
    });

    view! {
        <nav class="breadcrumb mb-0" aria-label="breadcrumbs">
            <ul>
                { items }
            </ul>
        </nav>
    }
}

#[component]
fn Item(text: String, href: String, is_active: bool) -> impl IntoView {

    view! {
        <li class=("is-active", move || is_active)>
            <a href={ href }>{ text }</a>
        </li>
    }
}
