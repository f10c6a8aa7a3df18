use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h1>Subnets</h1>
<table class="resource">
  <tr><th colspan="5" class="shaded">Characteristics</th></tr>
  <tr>
    <th>VPC ID</th>
    <th>Associated Route Table</th>
    <th>Subnet Name</th>
    <th>CIDR</th>
    <th>AZ</th>
  </tr>
  {{#each subnets as |subnet|}}
  <tr>
    {{#if @first}}<td rowspan="{{../subnet_count}}" class="side">{{../vpc_id}}</td>{{/if}}
    <td>{{subnet.route_table}}</td>
    <td>{{subnet.name}}</td>
    <td>{{subnet.cidr_block}}</td>
    <td>{{subnet.availability_zone}}</td>
  </tr>
  {{/each}}
</table>
"##;

    template.to_string()
}
