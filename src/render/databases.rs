use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h1>Relational Database</h1>
<table class="resource">
  <tr>
    <td rowspan="8" class="side">{{engine_title}}</td>
    <th colspan="2" class="shaded">Characteristics</th>
  </tr>
  <tr><td>DB Identifier</td><td>{{identifier}}</td></tr>
  <tr><td>Engine</td><td>{{engine}}</td></tr>
  <tr><td>Size</td><td>{{size}}</td></tr>
  <tr><td>Role</td><td>{{role}}</td></tr>
  <tr><td>Server Region</td><td>{{region}}</td></tr>
  <tr><td>Endpoint</td><td>{{endpoint}}</td></tr>
  <tr><td>Master Username</td><td>{{username}}</td></tr>
</table>
"##;

    template.to_string()
}
