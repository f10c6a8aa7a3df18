use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h2>Key Management</h2>
<p>{{alias}}</p>
<table class="resource">
  <tr>
    <td rowspan="3" class="side">Managed Keys</td>
    <td>Alias</td><td>{{alias}}</td>
  </tr>
  <tr><td>Key ID</td><td>{{id}}</td></tr>
  <tr><td>Description</td><td>{{description}}</td></tr>
</table>
"##;

    template.to_string()
}
