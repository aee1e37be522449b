use googletest::prelude::*;

use harvex_client::config::ExploreEndpoints;
use harvex_types::explore::{ExploreQuery, QueryResult, ResultContent};
use harvex_types::records::RecordId;
use harvex_types::registry::{Instance, InstanceId};

use crate::testing::{remotes, util};

#[tokio::test(flavor = "multi_thread")]
async fn stored_instances_should_appear_in_the_registry_listing() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let materials = remotes::materials_repository()?;
    let archive = remotes::research_archive()?;
    remotes::store(&server_url, &materials).await?;
    remotes::store(&server_url, &archive).await?;

    let instances = reqwest::get(server_url.join("api/registry/instances")?).await?
        .json::<Vec<Instance>>().await?;

    let names = instances.into_iter()
        .map(|instance| instance.name.value())
        .collect::<Vec<_>>();

    assert_that!(names, elements_are![
        eq("Materials Data Repository"),
        eq("Open Research Archive"),
    ]);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn a_keyword_query_should_answer_records_of_the_selected_instance() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let materials = remotes::materials_repository()?;
    let archive = remotes::research_archive()?;
    remotes::store(&server_url, &materials).await?;
    remotes::store(&server_url, &archive).await?;

    let query = util::create_query(&server_url).await?;
    assert_that!(query.data_sources, empty());

    let endpoints = ExploreEndpoints::from_server_url(&server_url)?;

    let response = reqwest::get(endpoints.data_source_update_url(query.id, materials.instance.id, true)).await?;
    assert_that!(response.status().as_u16(), eq(200));

    let stored = reqwest::get(server_url.join(&format!("api/explore/queries/{}", query.id))?).await?
        .json::<ExploreQuery>().await?;
    assert_that!(stored.data_sources, len(eq(1)));
    assert_that!(stored.data_sources[0].query_options.instance_id, eq(materials.instance.id));
    assert_that!(stored.data_sources[0].name, eq(Clone::clone(&materials.instance.name)));

    let results = execute_keyword_query(&server_url, "materials", materials.instance.id).await?;

    let identifiers = results.iter()
        .map(|result| Clone::clone(&result.title))
        .collect::<Vec<_>>();
    assert_that!(identifiers, unordered_elements_are![
        eq("oai:materials.example.org:42"),
        eq("oai:materials.example.org:43"),
    ]);
    for result in &results {
        assert_that!(result.origin.as_str(), eq("Dublin Core (version 1)"));
        assert_that!(result.detail_url.as_str(), starts_with("/data/"));
    }

    // The same keyword finds nothing in the other instance.
    let results = execute_keyword_query(&server_url, "materials", archive.instance.id).await?;
    assert_that!(results, empty());

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn a_result_link_should_resolve_to_the_record_content() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let materials = remotes::materials_repository()?;
    remotes::store(&server_url, &materials).await?;

    let results = execute_keyword_query(&server_url, "thermal", materials.instance.id).await?;
    assert_that!(results, len(eq(1)));

    let record_id = results[0].detail_url.strip_prefix("/data/").unwrap();

    let mut result_url = server_url.join("api/explore/result")?;
    result_url.query_pairs_mut().append_pair("id", record_id);

    let content = reqwest::get(result_url).await?
        .json::<ResultContent>().await?;

    assert_that!(content.title.as_str(), eq(record_id));
    assert_that!(content.content, contains_substring("Thermal conductivity of copper alloys"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn record_lookups_should_answer_the_documented_error_messages() -> anyhow::Result<()> {
    let server_url = util::spawn_server().await?;

    let response = reqwest::get(server_url.join("api/explore/result")?).await?;
    assert_that!(response.status().as_u16(), eq(400));
    assert_that!(response.text().await?.as_str(), eq(r#"{"message":"Data id is missing"}"#));

    let mut result_url = server_url.join("api/explore/result")?;
    result_url.query_pairs_mut().append_pair("id", &RecordId::random().to_string());

    let response = reqwest::get(result_url).await?;
    assert_that!(response.status().as_u16(), eq(404));
    assert_that!(response.text().await?.as_str(), eq(r#"{"message":"No Record found with the given id."}"#));

    Ok(())
}

async fn execute_keyword_query(server_url: &url::Url, keyword: &str, instance_id: InstanceId) -> anyhow::Result<Vec<QueryResult>> {
    let url = server_url.join("api/explore/execute-query")?;

    let query = format!(r#"{{"dc.subject": "{keyword}"}}"#);
    let options = format!(r#"{{"instance_id": "{instance_id}"}}"#);

    let response = reqwest::Client::new()
        .post(url)
        .form(&[("query", query.as_str()), ("options", options.as_str())])
        .send().await?;
    anyhow::ensure!(response.status().is_success(), "Executing the query failed with status {}.", response.status());

    Ok(response.json::<Vec<QueryResult>>().await?)
}
