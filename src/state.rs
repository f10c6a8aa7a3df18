use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resource type tags recognized by the report pipeline. Matching is exact
/// and case-sensitive; anything else never shows up in a report.
pub mod resource_types {
    pub const VPC: &str = "virtual-private-network";
    pub const SUBNET: &str = "subnet";
    pub const ROUTE_TABLE: &str = "route-table";
    pub const ROUTE_TABLE_ASSOCIATION: &str = "route-table-association";
    pub const INTERNET_GATEWAY: &str = "internet-gateway";
    pub const NAT_GATEWAY: &str = "nat-gateway";
    pub const COMPUTE_INSTANCE: &str = "compute-instance";
    pub const LOAD_BALANCER: &str = "load-balancer";
    pub const LOAD_BALANCER_LISTENER: &str = "load-balancer-listener";
    pub const TARGET_GROUP: &str = "target-group";
    pub const TARGET_GROUP_ATTACHMENT: &str = "target-group-attachment";
    pub const DATABASE_INSTANCE: &str = "database-instance";
    pub const ENCRYPTION_KEY: &str = "encryption-key";
    pub const ENCRYPTION_KEY_ALIAS: &str = "encryption-key-alias";
}

/// Top-level state document. `values.root_module` is the only required
/// structure; a document without it cannot produce a report.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StateFile {
    pub values: StateValues,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StateValues {
    pub root_module: Module,
}

/// One node of the module tree. Absent lists deserialize as empty so the
/// walkers never have to null-check.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Module {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub child_modules: Vec<Module>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Resource {
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub values: Map<String, Value>,
}

impl StateFile {
    pub fn parse(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn root_module(&self) -> &Module {
        &self.values.root_module
    }
}

impl Module {
    /// Collects every resource of `resource_type` in the subtree rooted
    /// here, depth-first, parent before children, left to right.
    pub fn find_resources(&self, resource_type: &str) -> Vec<&Resource> {
        let mut found = Vec::new();
        self.collect_resources(resource_type, &mut found);
        found
    }

    fn collect_resources<'a>(&'a self, resource_type: &str, found: &mut Vec<&'a Resource>) {
        for resource in &self.resources {
            if resource.resource_type == resource_type {
                found.push(resource);
            }
        }
        for child in &self.child_modules {
            child.collect_resources(resource_type, found);
        }
    }
}

impl Resource {
    /// Safe dotted-path lookup into `values`. Every call site states its
    /// own default policy instead of unwrapping.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    pub fn field_str<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.field(path).and_then(Value::as_str).unwrap_or(default)
    }

    pub fn id(&self) -> Option<&str> {
        self.field("id").and_then(Value::as_str)
    }

    /// Human tag name, when the producer set one.
    pub fn tag_name(&self) -> Option<&str> {
        self.field("tags.Name").and_then(Value::as_str)
    }

    /// Tag name over raw id over empty string. Used both for report
    /// display and as the sort key, so unnamed resources sort first.
    pub fn display_name(&self) -> &str {
        self.tag_name().or_else(|| self.id()).unwrap_or("")
    }
}
