use serde_json::json;
use tracing::info;
use url::Url;

use harvex_types::records::{Record, RecordId};
use harvex_types::registry::{Instance, InstanceId, InstanceName, MetadataFormat, MetadataFormatId, Template, TemplateId};

use crate::actions;
use crate::actions::StoreInstanceParams;
use crate::resources::manager::ResourcesManagerRef;

/// Fills the registry with two harvested demo instances, so the explore
/// pages have something to show on a fresh checkout.
pub async fn demo_data(resources_manager: ResourcesManagerRef) -> anyhow::Result<()> {

    let dublin_core = Template {
        id: TemplateId::random(),
        title: String::from("Dublin Core"),
        version: 1,
    };

    let materials = Instance {
        id: InstanceId::random(),
        name: InstanceName::try_from("Materials Data Repository")?,
        base_url: Url::parse("http://materials.example.org/oai")?,
        activated: true,
    };
    let materials_oai_dc = MetadataFormat {
        id: MetadataFormatId::random(),
        instance_id: materials.id,
        metadata_prefix: String::from("oai_dc"),
        template_id: Some(dublin_core.id),
    };
    actions::store_instance(StoreInstanceParams {
        resources_manager: Clone::clone(&resources_manager),
        instance: Clone::clone(&materials),
        metadata_formats: vec![Clone::clone(&materials_oai_dc)],
        templates: vec![Clone::clone(&dublin_core)],
        records: vec![
            record(&materials, &materials_oai_dc, "oai:materials.example.org:42",
                "Thermal conductivity of copper alloys", &["materials", "thermal"]),
            record(&materials, &materials_oai_dc, "oai:materials.example.org:43",
                "Creep behaviour of nickel superalloys", &["materials"]),
        ],
    }).await?;

    let archive = Instance {
        id: InstanceId::random(),
        name: InstanceName::try_from("Open Research Archive")?,
        base_url: Url::parse("http://archive.example.org/oai")?,
        activated: true,
    };
    let archive_oai_dc = MetadataFormat {
        id: MetadataFormatId::random(),
        instance_id: archive.id,
        metadata_prefix: String::from("oai_dc"),
        template_id: Some(dublin_core.id),
    };
    actions::store_instance(StoreInstanceParams {
        resources_manager,
        instance: Clone::clone(&archive),
        metadata_formats: vec![Clone::clone(&archive_oai_dc)],
        templates: Vec::new(),
        records: vec![
            record(&archive, &archive_oai_dc, "oai:archive.example.org:7",
                "Open peer review in practice", &["publishing"]),
        ],
    }).await?;

    info!("Seeded demo instances '{}' and '{}'.", materials.name, archive.name);

    Ok(())
}

fn record(instance: &Instance, format: &MetadataFormat, identifier: &str, title: &str, subjects: &[&str]) -> Record {
    let xml_content = format!(
        "<oai_dc:dc xmlns:oai_dc=\"http://www.openarchives.org/OAI/2.0/oai_dc/\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
         <dc:identifier>{identifier}</dc:identifier>\
         <dc:title>{title}</dc:title>\
         </oai_dc:dc>"
    );
    Record {
        id: RecordId::random(),
        instance_id: instance.id,
        identifier: String::from(identifier),
        metadata_format_id: format.id,
        metadata: json!({
            "dc": {
                "identifier": identifier,
                "title": title,
                "subject": subjects,
            }
        }),
        xml_content,
    }
}
