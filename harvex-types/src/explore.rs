use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::registry::{InstanceId, InstanceName};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub Uuid);

impl QueryId {

    pub const NIL: Self = Self(Uuid::from_bytes([0; 16]));

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::NIL
    }
}

impl From<Uuid> for QueryId {

    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal QueryId: {value}")]
pub struct IllegalQueryId {
    pub value: String,
}

impl TryFrom<&str> for QueryId {

    type Error = IllegalQueryId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IllegalQueryId { value: String::from(value) })
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthenticationKind {
    Session,
    OAuth2,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    pub kind: AuthenticationKind,
}

impl Authentication {
    pub fn session() -> Self {
        Self { kind: AuthenticationKind::Session }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub instance_id: InstanceId,
}

/// Membership entry linking a query to one instance it should be executed against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: InstanceName,
    pub url_query: Url,
    pub authentication: Authentication,
    pub query_options: QueryOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExploreQuery {
    pub id: QueryId,
    pub data_sources: Vec<DataSource>,
}

impl ExploreQuery {

    pub fn new(id: QueryId) -> Self {
        Self {
            id,
            data_sources: Vec::new(),
        }
    }

    pub fn data_source_for_instance(&self, instance_id: InstanceId) -> Option<&DataSource> {
        self.data_sources.iter()
            .find(|data_source| data_source.query_options.instance_id == instance_id)
    }

    /// Adds a data source unless one for the same instance is already present.
    /// The instance id is the identity of a data source, there is no uniqueness
    /// constraint on instance names.
    pub fn add_data_source(&mut self, data_source: DataSource) -> bool {
        let instance_id = data_source.query_options.instance_id;
        if self.data_source_for_instance(instance_id).is_some() {
            false
        } else {
            self.data_sources.push(data_source);
            true
        }
    }

    pub fn remove_data_source(&mut self, instance_id: InstanceId) -> Option<DataSource> {
        let index = self.data_sources.iter()
            .position(|data_source| data_source.query_options.instance_id == instance_id)?;
        Some(self.data_sources.remove(index))
    }
}

/// One row of a query execution answer, as shown in the result list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub title: String,
    pub xml_content: String,
    pub origin: String,
    pub detail_url: String,
}

/// Answer of a single-record lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultContent {
    pub title: String,
    pub content: String,
}
