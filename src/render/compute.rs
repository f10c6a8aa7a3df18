use serde_json::Value;
use std::error::Error;

pub fn render(bundle: &Value) -> Result<String, Box<dyn Error>> {
    super::renderer::render_template(bundle, &get_template())
}

pub fn get_template() -> String {
    let template = r##"
<h1>Compute Instance</h1>
<table class="resource">
  <tr>
    <td rowspan="7" class="side">{{name}}</td>
    <th colspan="5" class="shaded">Characteristics</th>
  </tr>
  <tr><td>Instance ID</td><td colspan="4">{{id}}</td></tr>
  <tr><td>Server Name</td><td colspan="4">{{name}}</td></tr>
  <tr><td>Operating System</td><td colspan="4">{{image}}</td></tr>
  <tr><td>Server Region</td><td colspan="4">{{region}}</td></tr>
  <tr><td>Family</td><td colspan="4">{{instance_type}}</td></tr>
  <tr><td>Associated Key Pair</td><td colspan="4">{{key_name}}</td></tr>
  <tr>
    <td rowspan="3" class="side">NETWORK</td>
    <td>Subnet</td><td colspan="4">{{subnet_id}}</td>
  </tr>
  <tr><td>Private IP</td><td colspan="4">{{private_ip}}</td></tr>
  <tr><td>Public IP</td><td colspan="4">{{public_ip}}</td></tr>
  <tr><th colspan="6">STORAGE</th></tr>
  <tr>
    <td>Volume ID</td><td>Path</td><td>Size (GB)</td>
    <td>Type</td><td>IOPS</td><td>Throughput</td>
  </tr>
  <tr>
    <td>{{storage.volume_id}}</td><td>{{storage.device_name}}</td><td>{{storage.volume_size}}</td>
    <td>{{storage.volume_type}}</td><td>{{storage.iops}}</td><td>{{storage.throughput}}</td>
  </tr>
</table>
"##;

    template.to_string()
}
