use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h2>NAT Gateway: {{name}}</h2>
<table class="resource">
  <tr>
    <td rowspan="5" class="side">NAT Gateway</td>
    <th colspan="2" class="shaded">Characteristics</th>
  </tr>
  <tr><td>VPC ID</td><td>{{vpc_id}}</td></tr>
  <tr><td>Subnet</td><td>{{subnet}}</td></tr>
  <tr><td>NAT GW Name</td><td>{{name}}</td></tr>
  <tr><td>NAT GW ID</td><td>{{id}}</td></tr>
</table>
"##;

    template.to_string()
}
