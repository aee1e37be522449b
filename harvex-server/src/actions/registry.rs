use tracing::{debug, error, info};

use harvex_types::records::Record;
use harvex_types::registry::{Instance, InstanceId, MetadataFormat, Template};

use crate::resources::manager::ResourcesManagerRef;

pub struct StoreInstanceParams {
    pub resources_manager: ResourcesManagerRef,
    pub instance: Instance,
    pub metadata_formats: Vec<MetadataFormat>,
    pub templates: Vec<Template>,
    pub records: Vec<Record>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreInstanceError {
    #[error("Instance '{name}' <{instance_id}> could not be stored: {cause}")]
    Internal { instance_id: InstanceId, name: String, cause: String },
}

/// Stores an instance together with the templates, metadata formats and
/// records harvested from it. Re-storing an instance replaces the previous
/// definition.
#[tracing::instrument(skip(params), level="trace")]
pub async fn store_instance(params: StoreInstanceParams) -> Result<InstanceId, StoreInstanceError> {

    async fn inner(params: StoreInstanceParams) -> Result<InstanceId, StoreInstanceError> {

        let StoreInstanceParams { resources_manager, instance, metadata_formats, templates, records } = params;

        let instance_id = instance.id;
        let instance_name = Clone::clone(&instance.name);

        debug!("Storing instance '{instance_name}' <{instance_id}> with {} metadata formats and {} records.",
            metadata_formats.len(), records.len());

        resources_manager.resources_mut(move |resources| {
            resources.insert(instance_id, instance);
            for template in templates {
                resources.insert(template.id, template);
            }
            for metadata_format in metadata_formats {
                resources.insert(metadata_format.id, metadata_format);
            }
            for record in records {
                resources.insert(record.id, record);
            }
        }).await;

        info!("Successfully stored instance '{instance_name}' <{instance_id}>.");

        Ok(instance_id)
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}

pub struct ListActivatedInstancesParams {
    pub resources_manager: ResourcesManagerRef,
}

#[derive(thiserror::Error, Debug)]
pub enum ListInstancesError {
    #[error("Instances could not be listed: {cause}")]
    Internal { cause: String },
}

#[tracing::instrument(skip(params), level="trace")]
pub async fn list_activated_instances(params: ListActivatedInstancesParams) -> Result<Vec<Instance>, ListInstancesError> {

    async fn inner(params: ListActivatedInstancesParams) -> Result<Vec<Instance>, ListInstancesError> {

        debug!("Listing activated instances.");

        let mut instances = params.resources_manager.resources(|resources| {
            resources.iter::<Instance>()
                .filter(|instance| instance.activated)
                .cloned()
                .collect::<Vec<_>>()
        }).await;

        instances.sort_by(|left, right| left.name.cmp(&right.name));

        info!("Successfully listed {} activated instances.", instances.len());

        Ok(instances)
    }

    inner(params).await
        .inspect_err(|err| error!("{err}"))
}
