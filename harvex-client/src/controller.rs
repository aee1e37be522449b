use std::cell::RefCell;
use std::time::Duration;

use futures::channel::mpsc::UnboundedReceiver;
use log::debug;

use harvex_types::explore::QueryId;
use harvex_types::registry::InstanceId;

use crate::config::ExploreEndpoints;
use crate::debounce::Debouncer;
use crate::fragment::{self, DataSourceRow};
use crate::transport::{ExploreTransport, RequestFailure};

pub const UPDATE_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Membership change armed for sending, bound to the query the list was
/// loaded for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MembershipUpdate {
    pub query_id: QueryId,
    pub instance_id: InstanceId,
    pub to_be_added: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ErrorDisplay {
    #[default]
    Hidden,
    Shown(String),
}

/// Everything a renderer needs to draw the list: the fragment exactly as the
/// server sent it, the membership parsed out of it, and the error display.
#[derive(Clone, Debug, Default)]
pub struct ListState {
    pub query_id: Option<QueryId>,
    pub container: String,
    pub rows: Vec<DataSourceRow>,
    pub error: ErrorDisplay,
}

type ViewHook = Box<dyn Fn(ListState)>;

/// Drives the list of selectable data sources for one stored query.
///
/// The controller performs no rendering itself. A view hook receives a state
/// snapshot after every change; debounced updates fire on the channel behind
/// [`fired_updates`](Self::fired_updates) and are forwarded into
/// [`send_update`](Self::send_update) by whoever drives the controller.
/// State borrows are never held across await points, so methods may be
/// re-entered freely from a single-threaded executor.
pub struct DataSourceListController<T: ExploreTransport> {
    endpoints: ExploreEndpoints,
    transport: T,
    state: RefCell<ListState>,
    debouncer: Debouncer<MembershipUpdate>,
    view_hook: RefCell<Option<ViewHook>>,
}

impl<T: ExploreTransport> DataSourceListController<T> {

    pub fn new(endpoints: ExploreEndpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
            state: RefCell::new(ListState::default()),
            debouncer: Debouncer::new(UPDATE_DEBOUNCE_DELAY),
            view_hook: RefCell::new(None),
        }
    }

    pub fn set_view_hook(&self, hook: impl Fn(ListState) + 'static) {
        *self.view_hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Yields the channel on which debounced updates fire. Present until the
    /// first call.
    pub fn fired_updates(&self) -> Option<UnboundedReceiver<MembershipUpdate>> {
        self.debouncer.take_receiver()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub async fn initialize(&self, query_id: QueryId) {
        self.hide_error();
        self.load_list(query_id).await;
    }

    /// Fetches the rendered list and replaces the container with the response
    /// body as-is. Concurrent calls are not de-duplicated; the call that
    /// completes last wins.
    pub async fn load_list(&self, query_id: QueryId) {
        self.hide_error();
        let url = self.endpoints.data_source_list_url(query_id);
        match self.transport.get_text(url).await {
            Ok(body) => {
                let rows = fragment::parse_data_source_rows(&body);
                {
                    let mut state = self.state.borrow_mut();
                    state.query_id = Some(query_id);
                    state.container = body;
                    state.rows = rows;
                }
                self.notify_view();
            }
            Err(failure) => self.handle_failure(failure),
        }
    }

    /// Change event of one checkbox: tracks the new membership state and
    /// schedules the server update. Ignored until a list has been loaded.
    pub fn toggled(&self, instance_id: InstanceId, checked: bool) {
        let query_id = {
            let mut state = self.state.borrow_mut();
            if let Some(row) = state.rows.iter_mut().find(|row| row.instance_id == instance_id) {
                row.checked = checked;
            }
            state.query_id
        };
        self.notify_view();

        if let Some(query_id) = query_id {
            self.schedule_update(MembershipUpdate { query_id, instance_id, to_be_added: checked });
        }
    }

    /// Arms the update for delivery after [`UPDATE_DEBOUNCE_DELAY`]. A
    /// previously armed update is replaced, whichever instance it was for.
    pub fn schedule_update(&self, update: MembershipUpdate) {
        debug!("Scheduling data source update: {update:?}");
        self.debouncer.schedule(update);
    }

    /// Sends one membership update. Success needs no further action, the
    /// checkbox already shows the new state.
    pub async fn send_update(&self, update: MembershipUpdate) {
        let url = self.endpoints.data_source_update_url(update.query_id, update.instance_id, update.to_be_added);
        if let Err(failure) = self.transport.get_text(url).await {
            self.handle_failure(failure);
        }
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.state.borrow_mut().error = ErrorDisplay::Shown(message.into());
        self.notify_view();
    }

    fn hide_error(&self) {
        let was_shown = {
            let mut state = self.state.borrow_mut();
            let was_shown = state.error != ErrorDisplay::Hidden;
            state.error = ErrorDisplay::Hidden;
            was_shown
        };
        if was_shown {
            self.notify_view();
        }
    }

    fn handle_failure(&self, failure: RequestFailure) {
        if failure.is_silent() {
            debug!("Request failed without a response body. Ignoring.");
        } else {
            self.show_error(failure.message);
        }
    }

    fn notify_view(&self) {
        let snapshot = self.state.borrow().clone();
        if let Some(hook) = self.view_hook.borrow().as_ref() {
            hook(snapshot);
        }
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::result::Result;

    use async_trait::async_trait;
    use futures::StreamExt;
    use googletest::prelude::*;
    use rstest::{fixture, rstest};
    use url::Url;

    use super::*;

    const INSTANCE_A: &str = "0ded5dd7-9955-4a5d-b14f-af39449be39c";
    const INSTANCE_B: &str = "6f3bba8e-14f9-4e55-9a53-1e3b1a2dbb3f";

    #[derive(Clone, Default)]
    struct RecordingTransport {
        requests: Rc<RefCell<Vec<Url>>>,
        responses: Rc<RefCell<VecDeque<Result<String, RequestFailure>>>>,
    }

    impl RecordingTransport {
        fn enqueue(&self, response: Result<String, RequestFailure>) {
            self.responses.borrow_mut().push_back(response);
        }
        fn requests(&self) -> Vec<Url> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ExploreTransport for RecordingTransport {
        async fn get_text(&self, url: Url) -> Result<String, RequestFailure> {
            self.requests.borrow_mut().push(url);
            self.responses.borrow_mut().pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    struct Fixture {
        query_id: QueryId,
        instance_a: InstanceId,
        instance_b: InstanceId,
        fragment: String,
        transport: RecordingTransport,
        controller: DataSourceListController<RecordingTransport>,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let query_id = QueryId::random();
        let instance_a = InstanceId::try_from(INSTANCE_A).unwrap();
        let instance_b = InstanceId::try_from(INSTANCE_B).unwrap();
        let fragment = format!(r#"<div class="data-sources-oaipmh">
            <label class="checkbox"><input type="checkbox" class="checkbox-oaipmh" value="{INSTANCE_A}" checked> Materials Data Repository</label>
            <label class="checkbox"><input type="checkbox" class="checkbox-oaipmh" value="{INSTANCE_B}"> Open Research Archive</label>
        </div>"#);
        let endpoints = ExploreEndpoints::from_server_url(&Url::parse("http://localhost:8080/").unwrap()).unwrap();
        let transport = RecordingTransport::default();
        let controller = DataSourceListController::new(endpoints, transport.clone());
        Fixture { query_id, instance_a, instance_b, fragment, transport, controller }
    }

    fn query_param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    #[rstest]
    #[tokio::test]
    async fn load_list_should_issue_one_get_carrying_the_query_id(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));

        fixture.controller.load_list(fixture.query_id).await;

        let requests = fixture.transport.requests();
        assert_that!(requests, len(eq(1)));
        assert_that!(requests[0].path(), eq("/api/explore/data-sources"));
        assert_that!(query_param(&requests[0], "id_query"), some(eq(fixture.query_id.to_string())));
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn load_list_should_keep_the_response_body_and_parse_the_membership(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));

        fixture.controller.load_list(fixture.query_id).await;

        let state = fixture.controller.state();
        assert_that!(state.container, eq(fixture.fragment.as_str()));
        assert_that!(state.query_id, some(eq(fixture.query_id)));
        assert_that!(state.rows, elements_are![
            eq(DataSourceRow {
                instance_id: fixture.instance_a,
                label: String::from("Materials Data Repository"),
                checked: true,
            }),
            eq(DataSourceRow {
                instance_id: fixture.instance_b,
                label: String::from("Open Research Archive"),
                checked: false,
            }),
        ]);
        assert_that!(state.error, eq(ErrorDisplay::Hidden));
        Ok(())
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn checking_a_row_should_send_the_update_after_the_debounce_window(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));
        let mut fired = fixture.controller.fired_updates().unwrap();

        fixture.controller.initialize(fixture.query_id).await;
        fixture.controller.toggled(fixture.instance_b, true);

        let update = fired.next().await.unwrap();
        assert_that!(update, eq(MembershipUpdate {
            query_id: fixture.query_id,
            instance_id: fixture.instance_b,
            to_be_added: true,
        }));

        fixture.controller.send_update(update).await;

        let requests = fixture.transport.requests();
        assert_that!(requests, len(eq(2)));
        assert_that!(requests[1].path(), eq("/api/explore/data-sources/update"));
        assert_that!(query_param(&requests[1], "id_query"), some(eq(fixture.query_id.to_string())));
        assert_that!(query_param(&requests[1], "id_instance"), some(eq(fixture.instance_b.to_string())));
        assert_that!(query_param(&requests[1], "to_be_added"), some(eq("true")));
        Ok(())
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn unchecking_a_checked_row_should_request_removal(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));
        let mut fired = fixture.controller.fired_updates().unwrap();

        fixture.controller.initialize(fixture.query_id).await;
        fixture.controller.toggled(fixture.instance_a, false);

        let update = fired.next().await.unwrap();
        fixture.controller.send_update(update).await;

        let requests = fixture.transport.requests();
        assert_that!(query_param(&requests[1], "id_instance"), some(eq(fixture.instance_a.to_string())));
        assert_that!(query_param(&requests[1], "to_be_added"), some(eq("false")));
        Ok(())
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn rapid_toggles_should_only_deliver_the_later_update(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));
        let mut fired = fixture.controller.fired_updates().unwrap();

        fixture.controller.initialize(fixture.query_id).await;
        fixture.controller.toggled(fixture.instance_a, false);
        fixture.controller.toggled(fixture.instance_b, true);

        let update = fired.next().await.unwrap();
        assert_that!(update.instance_id, eq(fixture.instance_b));
        assert_that!(update.to_be_added, eq(true));
        assert_that!(fired.try_next().is_err(), eq(true));

        fixture.controller.send_update(update).await;
        assert_that!(fixture.transport.requests(), len(eq(2)));
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn a_failing_list_response_with_a_body_should_show_the_error(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Err(RequestFailure {
            message: String::from("Error during loading data sources from oaipmh search."),
        }));

        fixture.controller.load_list(fixture.query_id).await;

        let state = fixture.controller.state();
        assert_that!(state.error, eq(ErrorDisplay::Shown(
            String::from("Error during loading data sources from oaipmh search.")
        )));
        assert_that!(state.container, eq(""));
        assert_that!(state.rows, empty());
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn a_failure_without_a_response_body_should_stay_silent(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Err(RequestFailure::no_response()));

        fixture.controller.load_list(fixture.query_id).await;

        assert_that!(fixture.controller.state().error, eq(ErrorDisplay::Hidden));
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn a_failing_update_should_show_the_server_message(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));
        fixture.transport.enqueue(Err(RequestFailure {
            message: String::from("Error during data source selection: Instance not found."),
        }));

        fixture.controller.initialize(fixture.query_id).await;
        fixture.controller.send_update(MembershipUpdate {
            query_id: fixture.query_id,
            instance_id: fixture.instance_b,
            to_be_added: true,
        }).await;

        assert_that!(fixture.controller.state().error, eq(ErrorDisplay::Shown(
            String::from("Error during data source selection: Instance not found.")
        )));
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn reloading_the_list_should_hide_a_previously_shown_error(fixture: Fixture) -> anyhow::Result<()> {
        fixture.transport.enqueue(Err(RequestFailure { message: String::from("boom") }));
        fixture.controller.load_list(fixture.query_id).await;
        assert_that!(fixture.controller.state().error, eq(ErrorDisplay::Shown(String::from("boom"))));

        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));
        fixture.controller.load_list(fixture.query_id).await;

        let state = fixture.controller.state();
        assert_that!(state.error, eq(ErrorDisplay::Hidden));
        assert_that!(state.container, eq(fixture.fragment.as_str()));
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn toggles_before_any_list_was_loaded_should_be_ignored(fixture: Fixture) -> anyhow::Result<()> {
        let mut fired = fixture.controller.fired_updates().unwrap();

        fixture.controller.toggled(fixture.instance_a, true);

        assert_that!(fired.try_next().is_err(), eq(true));
        assert_that!(fixture.transport.requests(), empty());
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    async fn the_view_hook_should_receive_a_snapshot_after_every_change(fixture: Fixture) -> anyhow::Result<()> {
        let snapshots: Rc<RefCell<Vec<ListState>>> = Rc::default();
        fixture.controller.set_view_hook({
            let snapshots = Rc::clone(&snapshots);
            move |state| snapshots.borrow_mut().push(state)
        });
        fixture.transport.enqueue(Ok(Clone::clone(&fixture.fragment)));

        fixture.controller.load_list(fixture.query_id).await;
        fixture.controller.toggled(fixture.instance_b, true);

        let snapshots = snapshots.borrow();
        assert_that!(*snapshots, len(eq(2)));
        assert_that!(snapshots[0].container, eq(fixture.fragment.as_str()));
        let toggled_row = snapshots[1].rows.iter()
            .find(|row| row.instance_id == fixture.instance_b)
            .unwrap();
        assert_that!(toggled_row.checked, eq(true));
        Ok(())
    }
}
