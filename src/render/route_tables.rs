use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h2>Route Table: {{name}}</h2>
<table class="resource">
  <tr>
    <td rowspan="{{add 5 route_count}}" class="side">Routes</td>
    <th colspan="2" class="shaded">Characteristics</th>
  </tr>
  <tr><td>VPC ID</td><td>{{vpc_id}}</td></tr>
  <tr><td>Table Name</td><td>{{name}}</td></tr>
  <tr><th colspan="2">Routes</th></tr>
  <tr><td>Destination</td><td>Target</td></tr>
  {{#each routes as |route|}}
  <tr><td>{{route.destination}}</td><td>{{route.target}}</td></tr>
  {{/each}}
</table>
"##;

    template.to_string()
}
