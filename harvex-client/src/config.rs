use serde::{Deserialize, Serialize};
use url::Url;

use harvex_types::explore::QueryId;
use harvex_types::registry::InstanceId;

/// Remote endpoints the data source list talks to. Passed in explicitly at
/// construction time, never read from ambient globals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExploreEndpoints {
    pub list_data_sources: Url,
    pub update_data_sources: Url,
}

impl ExploreEndpoints {

    pub fn from_server_url(server_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            list_data_sources: server_url.join("api/explore/data-sources")?,
            update_data_sources: server_url.join("api/explore/data-sources/update")?,
        })
    }

    pub fn data_source_list_url(&self, query_id: QueryId) -> Url {
        let mut url = Clone::clone(&self.list_data_sources);
        url.query_pairs_mut()
            .append_pair("id_query", &query_id.to_string());
        url
    }

    pub fn data_source_update_url(&self, query_id: QueryId, instance_id: InstanceId, to_be_added: bool) -> Url {
        let mut url = Clone::clone(&self.update_data_sources);
        url.query_pairs_mut()
            .append_pair("id_query", &query_id.to_string())
            .append_pair("id_instance", &instance_id.to_string())
            .append_pair("to_be_added", if to_be_added { "true" } else { "false" });
        url
    }
}
