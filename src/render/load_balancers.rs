use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h1>Application Load Balancer</h1>
<table class="resource">
  <tr>
    <td rowspan="7" class="side">{{name}}</td>
    <th colspan="3" class="shaded">Characteristics</th>
  </tr>
  <tr><td>Name</td><td colspan="2">{{name}}</td></tr>
  <tr><td>Type</td><td colspan="2">{{lb_type}}</td></tr>
  <tr><td>Scheme</td><td colspan="2">{{scheme}}</td></tr>
  <tr><td>VPC</td><td colspan="2">{{vpc_id}}</td></tr>
  <tr>
    <td>Availability Zones</td>
    <td colspan="2">{{#each availability_zones as |zone|}}{{zone}}<br/>{{/each}}</td>
  </tr>
  <tr><td>DNS Name</td><td colspan="2">{{dns_name}}</td></tr>
  <tr><th colspan="4">Listeners</th></tr>
  <tr><td></td><td>Protocol:Port</td><td>Redirect To</td><td>Target</td></tr>
  {{#each listeners as |listener|}}
  <tr>
    <td></td>
    <td>{{listener.protocol_port}}</td>
    <td>{{listener.redirect_to}}</td>
    <td>{{listener.target}}</td>
  </tr>
  {{/each}}
</table>
"##;

    template.to_string()
}
