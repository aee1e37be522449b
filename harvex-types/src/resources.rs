use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::explore::QueryId;
use crate::records::RecordId;
use crate::registry::{InstanceId, MetadataFormatId, TemplateId};

/// Uniform id under which any resource is stored, regardless of its type.
#[derive(Copy, Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Id {
    value: Uuid,
}

impl Id {
    pub fn random() -> Self {
        Uuid::new_v4().into()
    }
    pub fn value(&self) -> Uuid {
        self.value
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Uuid> for Id {
    fn from(value: Uuid) -> Self {
        Self {
            value,
        }
    }
}

impl From<QueryId> for Id {
    fn from(value: QueryId) -> Self {
        Self {
            value: value.0,
        }
    }
}

impl From<InstanceId> for Id {
    fn from(value: InstanceId) -> Self {
        Self {
            value: value.0,
        }
    }
}

impl From<RecordId> for Id {
    fn from(value: RecordId) -> Self {
        Self {
            value: value.0,
        }
    }
}

impl From<TemplateId> for Id {
    fn from(value: TemplateId) -> Self {
        Self {
            value: value.0,
        }
    }
}

impl From<MetadataFormatId> for Id {
    fn from(value: MetadataFormatId) -> Self {
        Self {
            value: value.0,
        }
    }
}
