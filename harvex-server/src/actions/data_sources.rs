use tracing::{debug, error, info};
use url::Url;

use harvex_types::explore::{Authentication, DataSource, ExploreQuery, QueryId, QueryOptions};
use harvex_types::registry::{Instance, InstanceId, InstanceName};

use crate::resources::manager::ResourcesManagerRef;

/// One row of the data source selection, in the order it is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSourceListRow {
    pub instance_id: InstanceId,
    pub instance_name: InstanceName,
    pub checked: bool,
}

pub struct ListDataSourcesParams {
    pub resources_manager: ResourcesManagerRef,
    pub query_id: QueryId,
}

#[derive(thiserror::Error, Debug)]
pub enum ListDataSourcesError {
    #[error("Explore query <{query_id}> could not be found!")]
    QueryNotFound { query_id: QueryId },
}

/// Lists all activated instances ordered by name, marking those which the
/// query already holds a data source for.
#[tracing::instrument(skip(params), level="trace")]
pub async fn list_data_sources(params: ListDataSourcesParams) -> Result<Vec<DataSourceListRow>, ListDataSourcesError> {

    async fn inner(params: ListDataSourcesParams) -> Result<Vec<DataSourceListRow>, ListDataSourcesError> {

        let query_id = params.query_id;

        debug!("Listing data sources for explore query <{query_id}>.");

        let query = params.resources_manager.get::<ExploreQuery>(query_id).await
            .ok_or(ListDataSourcesError::QueryNotFound { query_id })?;

        let mut instances = params.resources_manager.resources(|resources| {
            resources.iter::<Instance>()
                .filter(|instance| instance.activated)
                .cloned()
                .collect::<Vec<_>>()
        }).await;

        instances.sort_by(|left, right| left.name.cmp(&right.name));

        let rows = instances.into_iter()
            .map(|instance| DataSourceListRow {
                checked: query.data_source_for_instance(instance.id).is_some(),
                instance_id: instance.id,
                instance_name: instance.name,
            })
            .collect::<Vec<_>>();

        info!("Successfully listed {} data sources for explore query <{query_id}>.", rows.len());

        Ok(rows)
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}

pub struct UpdateQueryDataSourcesParams {
    pub resources_manager: ResourcesManagerRef,
    pub query_id: QueryId,
    pub instance_id: InstanceId,
    pub to_be_added: bool,
    pub execute_query_url: Url,
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateQueryDataSourcesError {
    #[error("Explore query <{query_id}> could not be found!")]
    QueryNotFound { query_id: QueryId },
    #[error("Instance <{instance_id}> could not be found!")]
    InstanceNotFound { instance_id: InstanceId },
    #[error("Data source not found in query.")]
    DataSourceNotFound { query_id: QueryId, instance_id: InstanceId },
}

/// Adds the instance as a data source to the query, or removes it again.
/// Adding an instance which is already selected leaves the query unchanged.
#[tracing::instrument(skip(params), level="trace")]
pub async fn update_query_data_sources(params: UpdateQueryDataSourcesParams) -> Result<(), UpdateQueryDataSourcesError> {

    async fn inner(params: UpdateQueryDataSourcesParams) -> Result<(), UpdateQueryDataSourcesError> {

        let UpdateQueryDataSourcesParams { resources_manager, query_id, instance_id, to_be_added, execute_query_url } = params;

        debug!("Updating data sources of explore query <{query_id}>: instance <{instance_id}>, to_be_added={to_be_added}.");

        resources_manager.resources_mut(move |resources| {

            let mut query = resources.get::<ExploreQuery>(query_id)
                .ok_or(UpdateQueryDataSourcesError::QueryNotFound { query_id })?;

            let instance = resources.get::<Instance>(instance_id)
                .ok_or(UpdateQueryDataSourcesError::InstanceNotFound { instance_id })?;

            if to_be_added {
                let data_source = DataSource {
                    name: instance.name,
                    url_query: execute_query_url,
                    authentication: Authentication::session(),
                    query_options: QueryOptions { instance_id },
                };
                if query.add_data_source(data_source) {
                    debug!("Added data source for instance <{instance_id}> to explore query <{query_id}>.");
                }
                else {
                    debug!("Explore query <{query_id}> already holds a data source for instance <{instance_id}>. Skipping.");
                }
            }
            else {
                query.remove_data_source(instance_id)
                    .ok_or(UpdateQueryDataSourcesError::DataSourceNotFound { query_id, instance_id })?;
                debug!("Removed data source for instance <{instance_id}> from explore query <{query_id}>.");
            }

            resources.insert(query_id, query);

            Ok(())
        }).await?;

        info!("Successfully updated data sources of explore query <{query_id}>.");

        Ok(())
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}
