use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h1>Virtual Private Network (VPC)</h1>
<table class="resource">
  <tr>
    <td rowspan="9" class="side">VPC</td>
    <th colspan="2" class="shaded">Characteristics</th>
  </tr>
  <tr><td>VPC ID</td><td>{{id}}</td></tr>
  <tr><td>VPC Name</td><td>{{name}}</td></tr>
  <tr><td>IPv4 CIDR</td><td>{{cidr_block}}</td></tr>
  <tr><th colspan="2">Associated Route Tables</th></tr>
  <tr><td>Default</td><td>{{route_tables.default}}</td></tr>
  <tr><td>Public</td><td>{{route_tables.public}}</td></tr>
  <tr><td>Private</td><td>{{route_tables.private}}</td></tr>
  <tr><td>RDS</td><td>{{route_tables.rds}}</td></tr>
</table>
"##;

    template.to_string()
}
