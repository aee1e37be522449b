use tracing::{debug, error, info};

use harvex_types::explore::{QueryResult, ResultContent};
use harvex_types::records::{Record, RecordId};
use harvex_types::registry::{InstanceId, MetadataFormat, Template, TemplateId};

use crate::query::filter::RecordFilter;
use crate::resources::manager::ResourcesManagerRef;
use crate::resources::Resources;

pub struct ExecuteQueryParams {
    pub resources_manager: ResourcesManagerRef,
    pub query: String,
    pub instance_id: InstanceId,
    pub template_ids: Option<Vec<TemplateId>>,
}

#[derive(thiserror::Error, Debug)]
pub enum ExecuteQueryError {
    #[error("{cause}")]
    InvalidQuery { cause: String },
}

/// Evaluates a filter document over the records harvested from one instance.
///
/// When template ids are given, the filter is additionally narrowed to the
/// instance's metadata formats mapping to one of these templates.
#[tracing::instrument(skip(params), level="trace")]
pub async fn execute_query(params: ExecuteQueryParams) -> Result<Vec<QueryResult>, ExecuteQueryError> {

    async fn inner(params: ExecuteQueryParams) -> Result<Vec<QueryResult>, ExecuteQueryError> {

        let ExecuteQueryParams { resources_manager, query, instance_id, template_ids } = params;

        debug!("Executing query over harvested records, instance <{instance_id}>.");

        let mut filter = RecordFilter::parse(&query)
            .map_err(|cause| ExecuteQueryError::InvalidQuery { cause: cause.to_string() })?;

        if let Some(template_ids) = template_ids {
            let format_ids = resources_manager.resources(|resources| {
                resources.iter::<MetadataFormat>()
                    .filter(|format| format.instance_id == instance_id)
                    .filter(|format| format.template_id.is_some_and(|template_id| template_ids.contains(&template_id)))
                    .map(|format| format.id)
                    .collect::<Vec<_>>()
            }).await;

            debug!("Restricting query to {} metadata formats of instance <{instance_id}>.", format_ids.len());

            filter.restrict_to_metadata_formats(format_ids);
        }

        let results = resources_manager.resources(|resources| {
            resources.iter::<Record>()
                .filter(|record| record.instance_id == instance_id)
                .filter(|record| filter.matches(record))
                .map(|record| QueryResult {
                    title: Clone::clone(&record.identifier),
                    xml_content: Clone::clone(&record.xml_content),
                    origin: origin_of(resources, record),
                    detail_url: format!("/data/{}", record.id),
                })
                .collect::<Vec<_>>()
        }).await;

        info!("Query matched {} records.", results.len());

        Ok(results)
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}

/// Names the schema a record was harvested in, preferring the template title
/// and version over the bare metadata prefix.
fn origin_of(resources: &Resources, record: &Record) -> String {
    match resources.get::<MetadataFormat>(record.metadata_format_id) {
        Some(format) => {
            let template = format.template_id
                .and_then(|template_id| resources.get::<Template>(template_id));
            match template {
                Some(template) => template.origin(),
                None => format.metadata_prefix,
            }
        }
        None => String::new(),
    }
}

pub struct GetResultParams {
    pub resources_manager: ResourcesManagerRef,
    pub record_id: RecordId,
}

#[derive(thiserror::Error, Debug)]
pub enum GetResultError {
    #[error("No Record found with the given id.")]
    RecordNotFound { record_id: RecordId },
}

#[tracing::instrument(skip(params), level="trace")]
pub async fn get_result(params: GetResultParams) -> Result<ResultContent, GetResultError> {

    async fn inner(params: GetResultParams) -> Result<ResultContent, GetResultError> {

        let record_id = params.record_id;

        debug!("Querying result content for record <{record_id}>.");

        let record = params.resources_manager.get::<Record>(record_id).await
            .ok_or(GetResultError::RecordNotFound { record_id })?;

        Ok(ResultContent {
            title: record_id.to_string(),
            content: record.xml_content,
        })
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}
