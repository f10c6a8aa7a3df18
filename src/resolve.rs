use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::NOT_AVAILABLE;
use crate::state::{resource_types, Module, Resource};

/// One subnet-to-route-table association, kept in input order. The raw
/// list is retained alongside the lookup map because role classification
/// must scan associations in the order they appeared, duplicates included.
#[derive(Debug, Clone)]
pub struct Association {
    pub subnet_id: String,
    pub route_table_id: String,
}

/// All cross-reference maps for one report generation. Built once from the
/// module tree, read-only afterwards. `IndexMap` keeps iteration in input
/// order so repeated runs over the same tree produce identical output.
#[derive(Debug, Default, Clone)]
pub struct ResolutionContext {
    /// subnet id -> full subnet record
    pub subnets: IndexMap<String, Resource>,
    /// route table id -> display name
    pub route_table_names: IndexMap<String, String>,
    /// subnet id -> route table id
    pub subnet_associations: IndexMap<String, String>,
    /// internet gateway id -> display name
    pub internet_gateway_names: IndexMap<String, String>,
    /// NAT gateway id -> display name
    pub nat_gateway_names: IndexMap<String, String>,
    /// encryption key id -> alias display name (prefix stripped)
    pub key_aliases: IndexMap<String, String>,
    /// target group arn -> attached instance ids, in attachment order
    pub target_group_attachments: IndexMap<String, Vec<String>>,

    associations: Vec<Association>,
}

/// Route-table roles assigned to one VPC. Each role is held by at most one
/// table; an unassigned role stays `None` and renders as a fallback label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteTableRoles {
    pub default: Option<String>,
    pub public: Option<String>,
    pub private: Option<String>,
    pub rds: Option<String>,
}

impl ResolutionContext {
    pub fn build(root: &Module) -> Self {
        let mut ctx = ResolutionContext::default();

        for subnet in root.find_resources(resource_types::SUBNET) {
            match subnet.id() {
                Some(id) => {
                    ctx.subnets.insert(id.to_string(), subnet.clone());
                }
                None => warn!("subnet without id excluded from subnet lookup"),
            }
        }

        ctx.route_table_names =
            display_name_map(&root.find_resources(resource_types::ROUTE_TABLE), "route table");
        ctx.internet_gateway_names = display_name_map(
            &root.find_resources(resource_types::INTERNET_GATEWAY),
            "internet gateway",
        );
        ctx.nat_gateway_names = display_name_map(
            &root.find_resources(resource_types::NAT_GATEWAY),
            "NAT gateway",
        );

        for assoc in root.find_resources(resource_types::ROUTE_TABLE_ASSOCIATION) {
            let subnet_id = assoc.field("subnet_id").and_then(Value::as_str);
            let route_table_id = assoc.field("route_table_id").and_then(Value::as_str);
            match (subnet_id, route_table_id) {
                (Some(subnet_id), Some(route_table_id)) => {
                    ctx.subnet_associations
                        .insert(subnet_id.to_string(), route_table_id.to_string());
                    ctx.associations.push(Association {
                        subnet_id: subnet_id.to_string(),
                        route_table_id: route_table_id.to_string(),
                    });
                }
                _ => warn!("route table association missing subnet_id or route_table_id; skipped"),
            }
        }

        for alias in root.find_resources(resource_types::ENCRYPTION_KEY_ALIAS) {
            let key_id = alias.field("target_key_id").and_then(Value::as_str);
            match key_id {
                Some(key_id) => {
                    let name = alias.field_str("name", "");
                    let display = name.strip_prefix("alias/").unwrap_or(name);
                    ctx.key_aliases.insert(key_id.to_string(), display.to_string());
                }
                None => warn!("encryption key alias without target_key_id; skipped"),
            }
        }

        for attachment in root.find_resources(resource_types::TARGET_GROUP_ATTACHMENT) {
            let arn = attachment.field("target_group_arn").and_then(Value::as_str);
            let target_id = attachment.field("target_id").and_then(Value::as_str);
            match (arn, target_id) {
                (Some(arn), Some(target_id)) => {
                    ctx.target_group_attachments
                        .entry(arn.to_string())
                        .or_default()
                        .push(target_id.to_string());
                }
                _ => warn!("target group attachment missing target_group_arn or target_id; skipped"),
            }
        }

        debug!(
            subnets = ctx.subnets.len(),
            route_tables = ctx.route_table_names.len(),
            associations = ctx.associations.len(),
            "resolution context built"
        );

        ctx
    }

    pub fn subnet(&self, id: &str) -> Option<&Resource> {
        self.subnets.get(id)
    }

    /// Route table display name, falling back to the raw id.
    pub fn route_table_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.route_table_names.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Internet gateway display name, falling back to the raw id.
    pub fn internet_gateway_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.internet_gateway_names
            .get(id)
            .map(String::as_str)
            .unwrap_or(id)
    }

    /// NAT gateway display name, falling back to the raw id.
    pub fn nat_gateway_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.nat_gateway_names.get(id).map(String::as_str).unwrap_or(id)
    }

    pub fn alias_for_key(&self, key_id: &str) -> Option<&str> {
        self.key_aliases.get(key_id).map(String::as_str)
    }

    pub fn attached_instances(&self, target_group_arn: &str) -> &[String] {
        self.target_group_attachments
            .get(target_group_arn)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Assigns route-table roles for one VPC.
    ///
    /// Default comes straight from the VPC's `main_route_table_id`, absent
    /// when that id resolves to no known table. Public/Private/RDS come
    /// from a first-match-wins substring scan over the lower-cased tag
    /// names of this VPC's subnets, walking associations in input order.
    /// The scan is an else-if chain: a name matching several substrings
    /// fixes only the first role checked. This mirrors the naming
    /// convention existing reports rely on; non-conforming subnets are
    /// simply never classified.
    pub fn classify_route_tables(&self, vpc: &Resource) -> RouteTableRoles {
        let mut roles = RouteTableRoles::default();

        if let Some(main_rt) = vpc.field("main_route_table_id").and_then(Value::as_str) {
            roles.default = self.route_table_names.get(main_rt).cloned();
        }

        let vpc_id = match vpc.id() {
            Some(id) => id,
            None => return roles,
        };

        let subnet_names: IndexMap<&str, String> = self
            .subnets
            .iter()
            .filter(|(_, subnet)| subnet.field_str("vpc_id", "") == vpc_id)
            .map(|(id, subnet)| (id.as_str(), subnet.tag_name().unwrap_or("").to_lowercase()))
            .collect();

        for assoc in &self.associations {
            let Some(subnet_name) = subnet_names.get(assoc.subnet_id.as_str()) else {
                continue;
            };
            let route_table_name = self
                .route_table_names
                .get(&assoc.route_table_id)
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            if subnet_name.contains("public") && roles.public.is_none() {
                roles.public = Some(route_table_name);
            } else if subnet_name.contains("private") && roles.private.is_none() {
                roles.private = Some(route_table_name);
            } else if subnet_name.contains("rds") && roles.rds.is_none() {
                roles.rds = Some(route_table_name);
            }
        }

        roles
    }
}

fn display_name_map(resources: &[&Resource], kind: &str) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for resource in resources {
        match resource.id() {
            Some(id) => {
                map.insert(id.to_string(), resource.tag_name().unwrap_or(id).to_string());
            }
            None => warn!("{kind} resource without id excluded from name lookup"),
        }
    }
    map
}
