use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::{InstanceId, MetadataFormatId};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("Illegal RecordId: {value}")]
pub struct IllegalRecordId {
    pub value: String,
}

impl TryFrom<&str> for RecordId {

    type Error = IllegalRecordId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| IllegalRecordId { value: String::from(value) })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A harvested metadata document. `metadata` holds the parsed document the
/// query filter is evaluated against, `xml_content` the verbatim payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub instance_id: InstanceId,
    pub identifier: String,
    pub metadata_format_id: MetadataFormatId,
    pub metadata: serde_json::Value,
    pub xml_content: String,
}
