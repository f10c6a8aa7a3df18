use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h2>Target Group: {{name}}</h2>
<table class="resource">
  <tr><th colspan="2" class="shaded">Characteristics</th></tr>
  <tr><td>Name</td><td>{{name}}</td></tr>
  <tr><td>Target Type</td><td>{{target_type}}</td></tr>
  <tr><td>Protocol</td><td>{{protocol}}</td></tr>
  <tr><td>Port</td><td>{{port}}</td></tr>
  <tr><th colspan="2">Attached Instances</th></tr>
  {{#if (isempty instances)}}
  <tr><td colspan="2">No attached instances</td></tr>
  {{else}}
  {{#each instances as |instance|}}
  <tr><td colspan="2">{{instance}}</td></tr>
  {{/each}}
  {{/if}}
</table>
"##;

    template.to_string()
}
