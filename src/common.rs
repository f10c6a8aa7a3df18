use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fallback label for any field the state document did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn write_string_to_file(filename: &str, content: &str) -> std::io::Result<()> {
    let path = Path::new(filename);
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    handlebars_helper!(isempty: |v: Value| match v {
        Value::Array(items) => items.is_empty(),
        Value::Null => true,
        _ => false,
    });
    handlebars.register_helper("isempty", Box::new(isempty));

    handlebars_helper!(add: |a: usize, b: usize| a + b);
    handlebars.register_helper("add", Box::new(add));

    handlebars
}
