use tracing::{debug, error, info};

use harvex_types::explore::{ExploreQuery, QueryId};

use crate::resources::manager::ResourcesManagerRef;

pub struct CreateExploreQueryParams {
    pub resources_manager: ResourcesManagerRef,
}

#[derive(thiserror::Error, Debug)]
pub enum CreateExploreQueryError {
    #[error("Explore query <{query_id}> could not be created: {cause}")]
    Internal { query_id: QueryId, cause: String },
}

#[tracing::instrument(skip(params), level="trace")]
pub async fn create_explore_query(params: CreateExploreQueryParams) -> Result<ExploreQuery, CreateExploreQueryError> {

    async fn inner(params: CreateExploreQueryParams) -> Result<ExploreQuery, CreateExploreQueryError> {

        let query_id = QueryId::random();
        let query = ExploreQuery::new(query_id);

        debug!("Creating explore query <{query_id}>.");

        params.resources_manager.insert(query_id, Clone::clone(&query)).await;

        info!("Successfully created explore query <{query_id}>.");

        Ok(query)
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}

pub struct GetExploreQueryParams {
    pub resources_manager: ResourcesManagerRef,
    pub query_id: QueryId,
}

#[derive(thiserror::Error, Debug)]
pub enum GetExploreQueryError {
    #[error("Explore query <{query_id}> could not be found!")]
    QueryNotFound { query_id: QueryId },
}

#[tracing::instrument(skip(params), level="trace")]
pub async fn get_explore_query(params: GetExploreQueryParams) -> Result<ExploreQuery, GetExploreQueryError> {

    async fn inner(params: GetExploreQueryParams) -> Result<ExploreQuery, GetExploreQueryError> {

        let query_id = params.query_id;

        debug!("Querying explore query <{query_id}>.");

        params.resources_manager.get::<ExploreQuery>(query_id).await
            .ok_or(GetExploreQueryError::QueryNotFound { query_id })
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}
