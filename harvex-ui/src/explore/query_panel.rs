use leptos::*;

use harvex_client::controller::ListState;
use harvex_types::explore::QueryResult;
use harvex_types::registry::InstanceId;

use crate::api;
use crate::app::{use_app_globals, ExpectGlobals};
use crate::components::{ButtonColor, ButtonState, SimpleButton, NON_BREAKING_SPACE};

/// Keyword search over the data sources currently ticked in the list.
#[component]
pub fn QueryPanel(list_state: RwSignal<ListState>) -> impl IntoView {

    let globals = use_app_globals();

    let keyword = create_rw_signal(String::new());
    let results = create_rw_signal(Vec::<QueryResult>::new());
    let error_text = create_rw_signal(String::from(NON_BREAKING_SPACE));

    let execute_action = create_action(move |_: &()| {
        let server_url = globals.expect_config().server_url;
        let keyword = keyword.get_untracked();
        let instances = list_state.with_untracked(|state| {
            state.rows.iter()
                .filter(|row| row.checked)
                .map(|row| row.instance_id)
                .collect::<Vec<InstanceId>>()
        });
        async move {
            match api::execute_query(&server_url, &keyword, &instances).await {
                Ok(answer) => {
                    error_text.set(String::from(NON_BREAKING_SPACE));
                    results.set(answer);
                }
                Err(cause) => {
                    error_text.set(cause.to_string());
                }
            }
        }
    });

    let button_state = MaybeSignal::derive(move || {
        if execute_action.pending().get() {
            ButtonState::Loading
        }
        else if list_state.with(|state| state.rows.iter().any(|row| row.checked)) {
            ButtonState::Enabled
        }
        else {
            ButtonState::Disabled
        }
    });

    view! {
        <h2 class="subtitle is-5">"Query"</h2>
        <div class="field has-addons">
            <div class="control is-expanded">
                <input
                    class="input"
                    type="text"
                    placeholder="Keyword, for example: materials"
                    prop:value=keyword
                    on:input=move |event| keyword.set(event_target_value(&event))
                />
            </div>
            <div class="control">
                <SimpleButton
                    text="Run query"
                    color=ButtonColor::Info
                    state=button_state
                    on_action=move || execute_action.dispatch(())
                />
            </div>
        </div>
        <p class="help has-text-danger">{ move || error_text.get() }</p>
        <div class="table-container">
            <table class="table is-fullwidth is-striped">
                <thead>
                    <tr>
                        <th>"Record"</th>
                        <th>"Origin"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || results.get()
                        key=|result| result.detail_url.clone()
                        children=|result: QueryResult| {
                            view! {
                                <tr>
                                    <td><a href={ result.detail_url }>{ result.title }</a></td>
                                    <td>{ result.origin }</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
