use std::rc::Rc;

use futures::StreamExt;
use leptos::*;

use harvex_client::config::ExploreEndpoints;
use harvex_client::controller::{DataSourceListController, ErrorDisplay, ListState};
use harvex_client::transport::BrowserExploreTransport;
use harvex_types::explore::QueryId;
use harvex_types::registry::InstanceId;

use crate::app::{use_app_globals, ExpectGlobals};
use crate::components::NON_BREAKING_SPACE;

/// The checkbox list of data sources attached to one stored query.
///
/// The markup comes from the server as a rendered fragment and is placed into
/// the view unchanged. Checkbox changes bubble up to the container and are
/// handed to the controller, which schedules the debounced server update.
#[component]
pub fn DataSourceList(query_id: QueryId, state: RwSignal<ListState>) -> impl IntoView {

    let globals = use_app_globals();

    let endpoints = ExploreEndpoints::from_server_url(&globals.expect_config().server_url)
        .expect("The server URL should extend into the explore endpoints.");

    let controller = Rc::new(DataSourceListController::new(endpoints, BrowserExploreTransport));

    controller.set_view_hook(move |snapshot| state.set(snapshot));

    if let Some(mut fired) = controller.fired_updates() {
        let controller = Rc::downgrade(&controller);
        spawn_local(async move {
            while let Some(update) = fired.next().await {
                let Some(controller) = controller.upgrade() else { break };
                controller.send_update(update).await;
            }
        });
    }

    spawn_local({
        let controller = Rc::clone(&controller);
        async move {
            controller.initialize(query_id).await;
        }
    });

    // The fragment must only be re-rendered when the server sends a new one.
    // Writing it back on every state change would reset the checkbox the user
    // just clicked.
    let container = create_memo(move |_| state.with(|state| Clone::clone(&state.container)));

    let help_text = move || {
        state.with(|state| match &state.error {
            ErrorDisplay::Hidden => String::from(NON_BREAKING_SPACE),
            ErrorDisplay::Shown(message) => message.to_owned(),
        })
    };

    view! {
        <div
            on:change={
                let controller = Rc::clone(&controller);
                move |event| {
                    let value = event_target_value(&event);
                    match InstanceId::try_from(value.as_str()) {
                        Ok(instance_id) => controller.toggled(instance_id, event_target_checked(&event)),
                        Err(_) => log::warn!("Ignoring a change event without an instance id, value was: '{value}'"),
                    }
                }
            }
            inner_html=move || container.get()
        />
        <p class="help has-text-danger">{ help_text }</p>
    }
}
