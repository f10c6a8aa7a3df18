use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h2>Internet Gateway: {{name}}</h2>
<table class="resource">
  <tr>
    <td rowspan="4" class="side">IGW</td>
    <th colspan="2" class="shaded">Characteristics</th>
  </tr>
  <tr><td>VPC ID</td><td>{{vpc_id}}</td></tr>
  <tr><td>IGW Name</td><td>{{name}}</td></tr>
  <tr><td>IGW ID</td><td>{{id}}</td></tr>
</table>
"##;

    template.to_string()
}
