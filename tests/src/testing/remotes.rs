use anyhow::ensure;
use serde_json::json;
use url::Url;

use harvex_types::records::{Record, RecordId};
use harvex_types::registry::{Instance, InstanceId, InstanceName, MetadataFormat, MetadataFormatId, Template, TemplateId};

/// An instance together with everything harvested from it.
pub struct Remote {
    pub instance: Instance,
    pub template: Template,
    pub format: MetadataFormat,
    pub records: Vec<Record>,
}

pub fn materials_repository() -> anyhow::Result<Remote> {
    remote(
        "Materials Data Repository",
        "http://materials.example.org/oai",
        &[
            ("oai:materials.example.org:42", "Thermal conductivity of copper alloys", &["materials", "thermal"] as &[&str]),
            ("oai:materials.example.org:43", "Creep behaviour of nickel superalloys", &["materials"]),
        ],
    )
}

pub fn research_archive() -> anyhow::Result<Remote> {
    remote(
        "Open Research Archive",
        "http://archive.example.org/oai",
        &[
            ("oai:archive.example.org:7", "Open peer review in practice", &["publishing"] as &[&str]),
        ],
    )
}

fn remote(name: &str, base_url: &str, records: &[(&str, &str, &[&str])]) -> anyhow::Result<Remote> {
    let instance = Instance {
        id: InstanceId::random(),
        name: InstanceName::try_from(name)?,
        base_url: Url::parse(base_url)?,
        activated: true,
    };
    let template = Template {
        id: TemplateId::random(),
        title: String::from("Dublin Core"),
        version: 1,
    };
    let format = MetadataFormat {
        id: MetadataFormatId::random(),
        instance_id: instance.id,
        metadata_prefix: String::from("oai_dc"),
        template_id: Some(template.id),
    };
    let records = records.iter()
        .map(|(identifier, title, subjects)| Record {
            id: RecordId::random(),
            instance_id: instance.id,
            identifier: String::from(*identifier),
            metadata_format_id: format.id,
            metadata: json!({
                "dc": {
                    "identifier": identifier,
                    "title": title,
                    "subject": subjects,
                }
            }),
            xml_content: format!("<oai_dc:dc><dc:title>{title}</dc:title></oai_dc:dc>"),
        })
        .collect();

    Ok(Remote { instance, template, format, records })
}

/// Stores the remote through the registry API.
pub async fn store(server_url: &Url, remote: &Remote) -> anyhow::Result<InstanceId> {
    let url = server_url.join("api/registry/instances")?;
    let payload = json!({
        "instance": remote.instance,
        "templates": [remote.template],
        "metadata_formats": [remote.format],
        "records": remote.records,
    });

    let response = reqwest::Client::new()
        .put(url)
        .json(&payload)
        .send().await?;
    ensure!(response.status().is_success(), "Storing the instance failed with status {}.", response.status());

    Ok(response.json::<InstanceId>().await?)
}
