#![allow(unused_imports)]

pub use queries::{
    create_explore_query,
    CreateExploreQueryParams,
    CreateExploreQueryError,
};

pub use queries::{
    get_explore_query,
    GetExploreQueryParams,
    GetExploreQueryError,
};

pub use data_sources::{
    list_data_sources,
    DataSourceListRow,
    ListDataSourcesParams,
    ListDataSourcesError,
};

pub use data_sources::{
    update_query_data_sources,
    UpdateQueryDataSourcesParams,
    UpdateQueryDataSourcesError,
};

pub use registry::{
    store_instance,
    StoreInstanceParams,
    StoreInstanceError,
};

pub use registry::{
    list_activated_instances,
    ListActivatedInstancesParams,
    ListInstancesError,
};

pub use records::{
    execute_query,
    ExecuteQueryParams,
    ExecuteQueryError,
};

pub use records::{
    get_result,
    GetResultParams,
    GetResultError,
};

mod data_sources;
mod queries;
mod records;
mod registry;
