use harvex_types::explore::{ExploreQuery, QueryId};
use harvex_types::records::{Record, RecordId};
use harvex_types::registry::{Instance, InstanceId, MetadataFormat, MetadataFormatId, Template, TemplateId};

use crate::resources::Id;

pub trait IntoId<R> {
    fn into_id(self) -> Id;
}

impl IntoId<ExploreQuery> for QueryId {
    fn into_id(self) -> Id {
        Id::from(self.0)
    }
}

impl IntoId<Instance> for InstanceId {
    fn into_id(self) -> Id {
        Id::from(self.0)
    }
}

impl IntoId<MetadataFormat> for MetadataFormatId {
    fn into_id(self) -> Id {
        Id::from(self.0)
    }
}

impl IntoId<Record> for RecordId {
    fn into_id(self) -> Id {
        Id::from(self.0)
    }
}

impl IntoId<Template> for TemplateId {
    fn into_id(self) -> Id {
        Id::from(self.0)
    }
}
