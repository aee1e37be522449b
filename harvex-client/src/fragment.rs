use scraper::{ElementRef, Html, Selector};

use harvex_types::registry::InstanceId;

/// Selector the server-rendered list marks its checkboxes with.
pub const CHECKBOX_SELECTOR: &str = "input.checkbox-oaipmh";

/// Membership of one instance as rendered into the list fragment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataSourceRow {
    pub instance_id: InstanceId,
    pub label: String,
    pub checked: bool,
}

/// Extracts the membership rows from a server-rendered list fragment, in
/// document order. The `value` attribute carries the instance id, presence of
/// `checked` the membership. Inputs without a parseable id are skipped.
pub fn parse_data_source_rows(fragment: &str) -> Vec<DataSourceRow> {
    let document = Html::parse_fragment(fragment);

    let mut rows = Vec::new();
    if let Ok(selector) = Selector::parse(CHECKBOX_SELECTOR) {
        for input in document.select(&selector) {
            let Some(instance_id) = input.value().attr("value")
                .and_then(|value| InstanceId::try_from(value).ok())
            else {
                continue;
            };
            let checked = input.value().attr("checked").is_some();
            let label = input.parent()
                .and_then(ElementRef::wrap)
                .map(|parent| parent.text().collect::<String>().trim().to_owned())
                .unwrap_or_default();
            rows.push(DataSourceRow { instance_id, label, checked });
        }
    }
    rows
}
