pub mod compute;
pub mod databases;
pub mod document;
pub mod encryption_keys;
pub mod internet_gateways;
pub mod load_balancers;
pub mod nat_gateways;
pub mod route_tables;
pub mod subnets;
pub mod target_groups;
pub mod vpc;

/// Common rendering function used by all section renderers
pub mod renderer {
    use serde_json::Value;
    use std::error::Error;

    /// Standard rendering function for template-based sections
    pub fn render_template(bundle: &Value, template: &str) -> Result<String, Box<dyn Error>> {
        let handlebars = crate::common::get_handlebars();

        let res = handlebars.render_template(template, bundle)?;
        Ok(res)
    }
}
