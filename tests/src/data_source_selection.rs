use std::time::{Duration, Instant};

use futures::StreamExt;
use googletest::prelude::*;
use tokio::time::timeout;
use url::Url;

use harvex_client::config::ExploreEndpoints;
use harvex_client::controller::{DataSourceListController, ErrorDisplay, UPDATE_DEBOUNCE_DELAY};
use harvex_client::transport::HttpExploreTransport;
use harvex_types::explore::QueryId;

use crate::testing::{remotes, util};

#[tokio::test(flavor = "multi_thread")]
async fn toggling_a_data_source_should_reach_the_server_after_the_debounce_window() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let materials = remotes::materials_repository()?;
    let archive = remotes::research_archive()?;
    remotes::store(&server_url, &materials).await?;
    remotes::store(&server_url, &archive).await?;

    let query = util::create_query(&server_url).await?;

    let controller = controller_for(&server_url)?;
    let mut fired = controller.fired_updates().unwrap();

    controller.initialize(query.id).await;

    let state = controller.state();
    assert_that!(state.error, eq(ErrorDisplay::Hidden));
    assert_that!(state.container, contains_substring("Materials Data Repository"));
    assert_that!(
        state.rows.iter().map(|row| row.instance_id).collect::<Vec<_>>(),
        unordered_elements_are![eq(materials.instance.id), eq(archive.instance.id)]
    );
    assert_that!(state.rows.iter().all(|row| !row.checked), eq(true));

    let armed_at = Instant::now();
    controller.toggled(materials.instance.id, true);

    let update = timeout(Duration::from_secs(5), fired.next()).await?.unwrap();
    assert_that!(armed_at.elapsed(), ge(UPDATE_DEBOUNCE_DELAY));
    assert_that!(update.query_id, eq(query.id));
    assert_that!(update.instance_id, eq(materials.instance.id));
    assert_that!(update.to_be_added, eq(true));

    controller.send_update(update).await;
    assert_that!(controller.state().error, eq(ErrorDisplay::Hidden));

    // A fresh load renders the persisted selection.
    controller.load_list(query.id).await;
    let materials_row = controller.state().rows.into_iter()
        .find(|row| row.instance_id == materials.instance.id).unwrap();
    assert_that!(materials_row.checked, eq(true));

    let archive_row = controller.state().rows.into_iter()
        .find(|row| row.instance_id == archive.instance.id).unwrap();
    assert_that!(archive_row.checked, eq(false));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rapid_toggles_should_only_deliver_the_last_state() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let materials = remotes::materials_repository()?;
    remotes::store(&server_url, &materials).await?;

    let query = util::create_query(&server_url).await?;

    let controller = controller_for(&server_url)?;
    let mut fired = controller.fired_updates().unwrap();

    controller.initialize(query.id).await;

    controller.toggled(materials.instance.id, true);
    let update = timeout(Duration::from_secs(5), fired.next()).await?.unwrap();
    controller.send_update(update).await;

    controller.load_list(query.id).await;
    assert_that!(controller.state().rows[0].checked, eq(true));

    controller.toggled(materials.instance.id, false);
    controller.toggled(materials.instance.id, true);
    controller.toggled(materials.instance.id, false);

    let update = timeout(Duration::from_secs(5), fired.next()).await?.unwrap();
    assert_that!(update.to_be_added, eq(false));

    let further = timeout(UPDATE_DEBOUNCE_DELAY * 2, fired.next()).await;
    assert_that!(further.is_err(), eq(true));

    controller.send_update(update).await;
    assert_that!(controller.state().error, eq(ErrorDisplay::Hidden));

    controller.load_list(query.id).await;
    assert_that!(controller.state().rows[0].checked, eq(false));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn a_failing_list_request_should_show_the_server_error_text() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let controller = controller_for(&server_url)?;

    let missing = QueryId::random();
    controller.load_list(missing).await;

    assert_that!(controller.state().error, eq(ErrorDisplay::Shown(format!(
        "Error during loading data sources from oaipmh search: Explore query <{missing}> could not be found!"
    ))));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn an_unreachable_server_should_not_show_an_error() -> anyhow::Result<()> {
    // Nothing listens on port 1.
    let unreachable = Url::parse("http://localhost:1/")?;

    let controller = controller_for(&unreachable)?;

    controller.load_list(QueryId::random()).await;

    let state = controller.state();
    assert_that!(state.error, eq(ErrorDisplay::Hidden));
    assert_that!(state.container.is_empty(), eq(true));

    Ok(())
}

fn controller_for(server_url: &Url) -> anyhow::Result<DataSourceListController<HttpExploreTransport>> {
    Ok(DataSourceListController::new(
        ExploreEndpoints::from_server_url(server_url)?,
        HttpExploreTransport::new(),
    ))
}
