use crate::actions::DataSourceListRow;

/// Renders the data source selection as an HTML fragment.
///
/// Each row carries an `input.checkbox-oaipmh` whose `value` is the instance
/// id; the `checked` attribute reflects whether the query already holds the
/// instance as a data source.
pub fn render_data_source_list(rows: &[DataSourceListRow]) -> String {
    let mut html = String::from("<div class=\"data-sources-oaipmh\">\n");

    for row in rows {
        let checked = if row.checked { " checked" } else { "" };
        html.push_str(&format!(
            "  <div class=\"field\">\n    <label class=\"checkbox\">\n      <input type=\"checkbox\" class=\"checkbox-oaipmh\" value=\"{id}\"{checked}> {name}\n    </label>\n  </div>\n",
            id = row.instance_id,
            name = html_escape(&row.instance_name.to_string()),
        ));
    }

    html.push_str("</div>\n");
    html
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use harvex_types::registry::{InstanceId, InstanceName};

    use super::*;

    #[test]
    fn should_render_one_checkbox_per_row() {
        let instance_id = InstanceId::random();
        let other_id = InstanceId::random();

        let html = render_data_source_list(&[
            DataSourceListRow {
                instance_id,
                instance_name: InstanceName::try_from("Materials Data Repository").unwrap(),
                checked: true,
            },
            DataSourceListRow {
                instance_id: other_id,
                instance_name: InstanceName::try_from("Open Research Archive").unwrap(),
                checked: false,
            },
        ]);

        assert_that!(html, contains_substring(format!(
            r#"<input type="checkbox" class="checkbox-oaipmh" value="{instance_id}" checked> Materials Data Repository"#
        )));
        assert_that!(html, contains_substring(format!(
            r#"<input type="checkbox" class="checkbox-oaipmh" value="{other_id}"> Open Research Archive"#
        )));
    }

    #[test]
    fn should_escape_the_instance_name() -> anyhow::Result<()> {
        // Names deserialized from a registry payload bypass the TryFrom validation.
        let instance_name = serde_json::from_str::<InstanceName>(r#""R&D <Archive>""#)?;

        let html = render_data_source_list(&[
            DataSourceListRow {
                instance_id: InstanceId::random(),
                instance_name,
                checked: false,
            },
        ]);

        assert_that!(html, contains_substring("R&amp;D &lt;Archive&gt;"));

        Ok(())
    }

    #[test]
    fn should_render_an_empty_list_as_a_bare_container() {
        let html = render_data_source_list(&[]);

        assert_that!(html.as_str(), eq("<div class=\"data-sources-oaipmh\">\n</div>\n"));
    }
}
