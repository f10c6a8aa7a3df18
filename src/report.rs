use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::common::NOT_AVAILABLE;
use crate::render;
use crate::resolve::ResolutionContext;
use crate::state::{resource_types, Module, Resource, StateFile};

#[derive(Error, Debug)]
pub enum ReportError {
    /// The only fatal condition: the input is not valid structured data or
    /// has no root module. Everything below this degrades to fallbacks.
    #[error("state document is not valid structured data: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("failed to render report document: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Vpc,
    Subnets,
    RouteTable,
    InternetGateway,
    NatGateway,
    ComputeInstance,
    LoadBalancer,
    TargetGroup,
    DatabaseInstance,
    EncryptionKey,
}

/// One resolved report section: the kind picks the renderer, the body is
/// the fully resolved data bundle with every fallback already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub body: Value,
}

pub fn generate_html(state: &StateFile) -> Result<String, ReportError> {
    let sections = assemble(state.root_module());
    render::document::render_report(&sections).map_err(|e| ReportError::Render(e.to_string()))
}

pub fn generate_html_from_str(input: &str) -> Result<String, ReportError> {
    let state = StateFile::parse(input)?;
    generate_html(&state)
}

pub fn generate_html_from_value(input: Value) -> Result<String, ReportError> {
    let state = StateFile::from_value(input)?;
    generate_html(&state)
}

/// Download filename for a generated report, unique per invocation.
pub fn report_filename() -> String {
    format!(
        "infrastructure-report-{}.html",
        Utc::now().format("%Y%m%d-%H%M%S")
    )
}

/// Walks the tree once per resource type and emits resolved sections in
/// the fixed report order. Types with zero resources contribute nothing;
/// malformed resources are skipped, never fatal.
pub fn assemble(root: &Module) -> Vec<Section> {
    let ctx = ResolutionContext::build(root);
    let mut sections = Vec::new();

    for vpc in root.find_resources(resource_types::VPC) {
        match vpc.id() {
            Some(_) => sections.push(Section {
                kind: SectionKind::Vpc,
                body: vpc_bundle(vpc, &ctx),
            }),
            None => warn!("VPC without id skipped"),
        }
    }

    let mut subnets = root.find_resources(resource_types::SUBNET);
    if !subnets.is_empty() {
        subnets.sort_by_key(|s| s.tag_name().unwrap_or("").to_string());
        sections.push(Section {
            kind: SectionKind::Subnets,
            body: subnets_bundle(&subnets, &ctx),
        });
    }

    let mut route_tables = root.find_resources(resource_types::ROUTE_TABLE);
    route_tables.sort_by_key(|rt| rt.tag_name().unwrap_or("").to_string());
    for rt in route_tables {
        if rt.values.is_empty() {
            warn!("route table without values skipped");
            continue;
        }
        sections.push(Section {
            kind: SectionKind::RouteTable,
            body: route_table_bundle(rt, &ctx),
        });
    }

    for igw in root.find_resources(resource_types::INTERNET_GATEWAY) {
        sections.push(Section {
            kind: SectionKind::InternetGateway,
            body: internet_gateway_bundle(igw),
        });
    }

    let mut nat_gateways = root.find_resources(resource_types::NAT_GATEWAY);
    nat_gateways.sort_by_key(|nat| nat.tag_name().unwrap_or("").to_string());
    for nat in nat_gateways {
        sections.push(Section {
            kind: SectionKind::NatGateway,
            body: nat_gateway_bundle(nat, &ctx),
        });
    }

    for instance in root.find_resources(resource_types::COMPUTE_INSTANCE) {
        sections.push(Section {
            kind: SectionKind::ComputeInstance,
            body: compute_instance_bundle(instance),
        });
    }

    let listeners = root.find_resources(resource_types::LOAD_BALANCER_LISTENER);
    for lb in root.find_resources(resource_types::LOAD_BALANCER) {
        match lb.field("arn").and_then(Value::as_str) {
            Some(arn) => sections.push(Section {
                kind: SectionKind::LoadBalancer,
                body: load_balancer_bundle(lb, arn, &listeners, &ctx),
            }),
            None => warn!("load balancer without arn skipped"),
        }
    }

    let mut target_groups = root.find_resources(resource_types::TARGET_GROUP);
    target_groups.sort_by_key(|tg| tg.field_str("name", "").to_string());
    for tg in target_groups {
        sections.push(Section {
            kind: SectionKind::TargetGroup,
            body: target_group_bundle(tg, &ctx),
        });
    }

    for db in root.find_resources(resource_types::DATABASE_INSTANCE) {
        sections.push(Section {
            kind: SectionKind::DatabaseInstance,
            body: database_instance_bundle(db),
        });
    }

    for key in root.find_resources(resource_types::ENCRYPTION_KEY) {
        sections.push(Section {
            kind: SectionKind::EncryptionKey,
            body: encryption_key_bundle(key, &ctx),
        });
    }

    debug!(sections = sections.len(), "report assembled");
    sections
}

fn vpc_bundle(vpc: &Resource, ctx: &ResolutionContext) -> Value {
    let roles = ctx.classify_route_tables(vpc);
    json!({
        "id": vpc.field_str("id", NOT_AVAILABLE),
        "name": vpc.tag_name().unwrap_or(NOT_AVAILABLE),
        "cidr_block": vpc.field_str("cidr_block", NOT_AVAILABLE),
        "route_tables": {
            "default": roles.default.as_deref().unwrap_or(NOT_AVAILABLE),
            "public": roles.public.as_deref().unwrap_or(NOT_AVAILABLE),
            "private": roles.private.as_deref().unwrap_or(NOT_AVAILABLE),
            "rds": roles.rds.as_deref().unwrap_or(NOT_AVAILABLE),
        },
    })
}

fn subnets_bundle(subnets: &[&Resource], ctx: &ResolutionContext) -> Value {
    let rows: Vec<Value> = subnets
        .iter()
        .map(|subnet| {
            let subnet_id = subnet.field_str("id", NOT_AVAILABLE);
            // no association means the subnet rides the VPC's main table
            let route_table = match ctx.subnet_associations.get(subnet_id) {
                Some(rt_id) => ctx.route_table_name(rt_id),
                None => "N/A (main)",
            };
            json!({
                "vpc_id": subnet.field_str("vpc_id", NOT_AVAILABLE),
                "route_table": route_table,
                "name": subnet.tag_name().unwrap_or(NOT_AVAILABLE),
                "cidr_block": subnet.field_str("cidr_block", NOT_AVAILABLE),
                "availability_zone": subnet.field_str("availability_zone", NOT_AVAILABLE),
            })
        })
        .collect();

    json!({
        "vpc_id": subnets
            .first()
            .map(|s| s.field_str("vpc_id", NOT_AVAILABLE))
            .unwrap_or(NOT_AVAILABLE),
        "subnet_count": rows.len(),
        "subnets": rows,
    })
}

fn route_table_bundle(rt: &Resource, ctx: &ResolutionContext) -> Value {
    let routes: Vec<Value> = rt
        .field("route")
        .and_then(Value::as_array)
        .map(|routes| {
            routes
                .iter()
                .map(|route| {
                    json!({
                        "destination": route_destination(route),
                        "target": route_target(route, ctx),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    json!({
        "name": rt.tag_name().unwrap_or(NOT_AVAILABLE),
        "vpc_id": rt.field_str("vpc_id", NOT_AVAILABLE),
        "route_count": routes.len(),
        "routes": routes,
    })
}

fn route_destination(route: &Value) -> String {
    route
        .get("cidr_block")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| route.get("ipv6_cidr_block").and_then(Value::as_str))
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn route_target(route: &Value, ctx: &ResolutionContext) -> String {
    if let Some(gw_id) = non_empty_str(route.get("gateway_id")) {
        if gw_id == "local" {
            "Local".to_string()
        } else if gw_id.starts_with("igw-") {
            format!("IGW: {}", ctx.internet_gateway_name(gw_id))
        } else {
            gw_id.to_string()
        }
    } else if let Some(nat_id) = non_empty_str(route.get("nat_gateway_id")) {
        // unresolvable NAT ids render as the raw id, never fail
        format!("NAT GW: {}", ctx.nat_gateway_name(nat_id))
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn internet_gateway_bundle(igw: &Resource) -> Value {
    json!({
        "name": igw.tag_name().unwrap_or(NOT_AVAILABLE),
        "vpc_id": igw.field_str("vpc_id", NOT_AVAILABLE),
        "id": igw.field_str("id", NOT_AVAILABLE),
    })
}

fn nat_gateway_bundle(nat: &Resource, ctx: &ResolutionContext) -> Value {
    let subnet_id = nat.field_str("subnet_id", NOT_AVAILABLE);
    let subnet = ctx.subnet(subnet_id);
    let subnet_name = subnet
        .and_then(|s| s.tag_name())
        .unwrap_or(subnet_id);
    let subnet_az = subnet
        .and_then(|s| s.field("availability_zone"))
        .and_then(Value::as_str)
        .map(|az| az.rsplit('-').next().unwrap_or(az))
        .unwrap_or(NOT_AVAILABLE);

    json!({
        "name": nat.tag_name().unwrap_or(NOT_AVAILABLE),
        "id": nat.field_str("id", NOT_AVAILABLE),
        "vpc_id": subnet
            .map(|s| s.field_str("vpc_id", NOT_AVAILABLE))
            .unwrap_or(NOT_AVAILABLE),
        "subnet": format!("{subnet_id} / {subnet_name} - AZ {subnet_az}"),
    })
}

fn compute_instance_bundle(instance: &Resource) -> Value {
    let empty = Map::new();
    let root_device = instance
        .field("root_block_device")
        .and_then(Value::as_array)
        .and_then(|devices| devices.first())
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let public_ip = match instance.field("public_ip").and_then(Value::as_str) {
        Some(ip) if !ip.is_empty() => ip.to_string(),
        Some(_) => "Unassigned".to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    json!({
        "name": instance.tag_name().unwrap_or(NOT_AVAILABLE),
        "id": instance.field_str("id", NOT_AVAILABLE),
        "image": format!("From image: {}", instance.field_str("ami", NOT_AVAILABLE)),
        "region": region_of(instance.field_str("availability_zone", NOT_AVAILABLE)),
        "instance_type": instance.field_str("instance_type", NOT_AVAILABLE),
        "key_name": instance.field_str("key_name", NOT_AVAILABLE),
        "subnet_id": instance.field_str("subnet_id", NOT_AVAILABLE),
        "private_ip": instance.field_str("private_ip", NOT_AVAILABLE),
        "public_ip": public_ip,
        "storage": {
            "volume_id": object_str(root_device, "volume_id"),
            "device_name": object_str(root_device, "device_name"),
            "volume_size": object_display(root_device, "volume_size"),
            "volume_type": object_str(root_device, "volume_type"),
            "iops": object_display(root_device, "iops"),
            "throughput": object_display(root_device, "throughput"),
        },
    })
}

fn load_balancer_bundle(
    lb: &Resource,
    arn: &str,
    listeners: &[&Resource],
    ctx: &ResolutionContext,
) -> Value {
    let scheme = if lb.field("internal").and_then(Value::as_bool).unwrap_or(false) {
        "Internal"
    } else {
        "Internet-facing"
    };

    let availability_zones: Vec<String> = lb
        .field("subnets")
        .and_then(Value::as_array)
        .map(|subnet_ids| {
            subnet_ids
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|id| ctx.subnet(id))
                .map(|subnet| {
                    format!(
                        "{} ({})",
                        subnet.field_str("availability_zone", NOT_AVAILABLE),
                        subnet.field_str("availability_zone_id", NOT_AVAILABLE)
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    let listener_rows: Vec<Value> = listeners
        .iter()
        .filter(|listener| listener.field_str("load_balancer_arn", "") == arn)
        .map(|listener| listener_row(listener, ctx))
        .collect();

    json!({
        "name": lb.field_str("name", NOT_AVAILABLE),
        "lb_type": capitalize(lb.field_str("load_balancer_type", NOT_AVAILABLE)),
        "scheme": scheme,
        "vpc_id": lb.field_str("vpc_id", NOT_AVAILABLE),
        "availability_zones": availability_zones,
        "dns_name": lb.field_str("dns_name", NOT_AVAILABLE),
        "listeners": listener_rows,
    })
}

fn listener_row(listener: &Resource, ctx: &ResolutionContext) -> Value {
    let empty = Value::Object(Map::new());
    let action = listener
        .field("default_action")
        .and_then(Value::as_array)
        .and_then(|actions| actions.first())
        .unwrap_or(&empty);

    let mut redirect_to = NOT_AVAILABLE.to_string();
    let mut target = NOT_AVAILABLE.to_string();

    match action.get("type").and_then(Value::as_str) {
        Some("forward") => {
            let tg_arn = action
                .pointer("/forward/0/target_group/0/arn")
                .and_then(Value::as_str)
                .unwrap_or("");
            let instances = ctx.attached_instances(tg_arn);
            if !instances.is_empty() {
                target = instances.join(", ");
                // second-to-last arn segment is the target group name
                let mut segments: Vec<&str> = tg_arn.split('/').collect();
                segments.pop();
                if let Some(name) = segments.pop() {
                    redirect_to = name.to_string();
                }
            }
        }
        Some("redirect") => {
            let status = action
                .pointer("/redirect/0/status_code")
                .and_then(Value::as_str)
                .unwrap_or(NOT_AVAILABLE);
            redirect_to = format!("Redirect ({status})");
            target = format!(
                "Port {}",
                action
                    .pointer("/redirect/0/port")
                    .and_then(Value::as_str)
                    .unwrap_or(NOT_AVAILABLE)
            );
        }
        _ => {}
    }

    json!({
        "protocol_port": format!(
            "{}:{}",
            listener.field_str("protocol", NOT_AVAILABLE),
            listener
                .field("port")
                .map(display_value)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        ),
        "redirect_to": redirect_to,
        "target": target,
    })
}

fn target_group_bundle(tg: &Resource, ctx: &ResolutionContext) -> Value {
    let instances: Vec<String> = tg
        .field("arn")
        .and_then(Value::as_str)
        .map(|arn| ctx.attached_instances(arn).to_vec())
        .unwrap_or_default();

    json!({
        "name": tg.field_str("name", NOT_AVAILABLE),
        "target_type": capitalize(tg.field_str("target_type", NOT_AVAILABLE)),
        "protocol": tg.field_str("protocol", NOT_AVAILABLE),
        "port": tg.field("port").map(display_value).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        "instances": instances,
    })
}

fn database_instance_bundle(db: &Resource) -> Value {
    let engine = db.field_str("engine", NOT_AVAILABLE);
    let engine_with_version =
        format!("{} {}", engine, db.field_str("engine_version", "")).trim().to_string();
    let role = if db.field("replicate_source_db").and_then(Value::as_str).map_or(true, str::is_empty)
    {
        "Writer Instance"
    } else {
        "Replica Instance"
    };

    json!({
        "engine_title": format!("Amazon {}", capitalize(engine)),
        "identifier": db.field_str("identifier", NOT_AVAILABLE),
        "engine": engine_with_version,
        "size": db.field_str("instance_class", NOT_AVAILABLE),
        "role": role,
        "region": region_of(db.field_str("availability_zone", NOT_AVAILABLE)),
        "endpoint": db.field_str("endpoint", NOT_AVAILABLE),
        "username": db.field_str("username", NOT_AVAILABLE),
    })
}

fn encryption_key_bundle(key: &Resource, ctx: &ResolutionContext) -> Value {
    let alias = key
        .id()
        .and_then(|id| ctx.alias_for_key(id))
        .unwrap_or(NOT_AVAILABLE);

    json!({
        "alias": alias,
        "id": key.field_str("id", NOT_AVAILABLE),
        "description": key.field_str("description", NOT_AVAILABLE),
    })
}

/// "eu-west-1a" -> "eu-west-1". Values with no dash pass through.
fn region_of(availability_zone: &str) -> &str {
    match availability_zone.rsplit_once('-') {
        Some((region, _)) => region,
        None => availability_zone,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn object_str<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or(NOT_AVAILABLE)
}

/// Numeric or string field rendered as display text.
fn object_display(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .map(display_value)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_from(resources: Vec<Value>) -> StateFile {
        StateFile::from_value(json!({
            "values": {"root_module": {"resources": resources}}
        }))
        .expect("valid state")
    }

    #[test]
    fn empty_tree_yields_no_sections() {
        let state = state_from(vec![]);
        assert!(assemble(state.root_module()).is_empty());

        let html = generate_html(&state).expect("report renders");
        assert!(html.contains("Infrastructure Technical Report"));
    }

    #[test]
    fn sections_come_out_in_fixed_order() {
        let state = state_from(vec![
            json!({"type": "encryption-key", "values": {"id": "key-1"}}),
            json!({"type": "database-instance", "values": {"identifier": "db-1"}}),
            json!({"type": "compute-instance", "values": {"id": "i-1"}}),
            json!({"type": "subnet", "values": {"id": "subnet-1"}}),
            json!({"type": "virtual-private-network", "values": {"id": "vpc-1"}}),
        ]);
        let kinds: Vec<SectionKind> = assemble(state.root_module())
            .iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Vpc,
                SectionKind::Subnets,
                SectionKind::ComputeInstance,
                SectionKind::DatabaseInstance,
                SectionKind::EncryptionKey,
            ]
        );
    }

    #[test]
    fn named_sections_sort_by_display_name_with_unnamed_first() {
        let state = state_from(vec![
            json!({"type": "route-table", "values": {"id": "rtb-b", "tags": {"Name": "beta"}}}),
            json!({"type": "route-table", "values": {"id": "rtb-a", "tags": {"Name": "alpha"}}}),
            json!({"type": "route-table", "values": {"id": "rtb-x"}}),
        ]);
        let names: Vec<String> = assemble(state.root_module())
            .iter()
            .map(|s| s.body["name"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["N/A", "alpha", "beta"]);
    }

    #[test]
    fn assembly_is_idempotent() {
        let state = state_from(vec![
            json!({"type": "virtual-private-network",
                   "values": {"id": "vpc-1", "cidr_block": "10.0.0.0/16"}}),
            json!({"type": "subnet",
                   "values": {"id": "subnet-1", "vpc_id": "vpc-1",
                              "tags": {"Name": "public-a"}}}),
            json!({"type": "route-table", "values": {"id": "rtb-1", "tags": {"Name": "pub"}}}),
            json!({"type": "route-table-association",
                   "values": {"subnet_id": "subnet-1", "route_table_id": "rtb-1"}}),
        ]);

        let first = assemble(state.root_module());
        let second = assemble(state.root_module());
        assert_eq!(first, second);
        assert_eq!(
            generate_html(&state).expect("renders"),
            generate_html(&state).expect("renders")
        );
    }

    #[test]
    fn vpc_bundle_carries_role_assignments() {
        let state = state_from(vec![
            json!({"type": "virtual-private-network",
                   "values": {"id": "vpc-1", "main_route_table_id": "rtb-m"}}),
            json!({"type": "route-table", "values": {"id": "rtb-m", "tags": {"Name": "main"}}}),
            json!({"type": "route-table", "values": {"id": "rtb-p", "tags": {"Name": "rtb-pub"}}}),
            json!({"type": "subnet",
                   "values": {"id": "subnet-1", "vpc_id": "vpc-1",
                              "tags": {"Name": "public-a"}}}),
            json!({"type": "route-table-association",
                   "values": {"subnet_id": "subnet-1", "route_table_id": "rtb-p"}}),
        ]);

        let sections = assemble(state.root_module());
        let vpc = &sections[0];
        assert_eq!(vpc.kind, SectionKind::Vpc);
        assert_eq!(vpc.body["route_tables"]["default"], "main");
        assert_eq!(vpc.body["route_tables"]["public"], "rtb-pub");
        assert_eq!(vpc.body["route_tables"]["private"], "N/A");
        assert_eq!(vpc.body["route_tables"]["rds"], "N/A");
    }

    #[test]
    fn subnet_without_association_rides_the_main_table() {
        let state = state_from(vec![json!({
            "type": "subnet",
            "values": {"id": "subnet-1", "vpc_id": "vpc-1"}
        })]);

        let sections = assemble(state.root_module());
        assert_eq!(sections[0].body["subnets"][0]["route_table"], "N/A (main)");
    }

    #[test]
    fn route_targets_resolve_gateways_and_fall_back_to_raw_ids() {
        let state = state_from(vec![
            json!({"type": "internet-gateway",
                   "values": {"id": "igw-1", "tags": {"Name": "edge"}}}),
            json!({"type": "route-table",
                   "values": {"id": "rtb-1", "route": [
                       {"cidr_block": "10.0.0.0/16", "gateway_id": "local"},
                       {"cidr_block": "0.0.0.0/0", "gateway_id": "igw-1"},
                       {"cidr_block": "0.0.0.0/0", "nat_gateway_id": "nat-unseen"},
                       {"cidr_block": "192.168.0.0/24", "gateway_id": "vgw-9"},
                       {"ipv6_cidr_block": "::/0"}
                   ]}}),
        ]);

        let sections = assemble(state.root_module());
        let routes = sections
            .iter()
            .find(|s| s.kind == SectionKind::RouteTable)
            .expect("route table section")
            .body["routes"]
            .clone();

        assert_eq!(routes[0]["target"], "Local");
        assert_eq!(routes[1]["target"], "IGW: edge");
        assert_eq!(routes[2]["target"], "NAT GW: nat-unseen");
        assert_eq!(routes[3]["target"], "vgw-9");
        assert_eq!(routes[4]["destination"], "::/0");
        assert_eq!(routes[4]["target"], "N/A");
    }

    #[test]
    fn load_balancer_pairs_with_its_listeners_only() {
        let state = state_from(vec![
            json!({"type": "load-balancer",
                   "values": {"arn": "lb-1", "name": "web", "internal": false,
                              "load_balancer_type": "application"}}),
            json!({"type": "load-balancer-listener",
                   "values": {"load_balancer_arn": "lb-1", "protocol": "HTTPS", "port": 443,
                              "default_action": [
                                  {"type": "forward",
                                   "forward": [{"target_group": [
                                       {"arn": "arn:elb:targetgroup/web-tg/abc"}]}]}
                              ]}}),
            json!({"type": "load-balancer-listener",
                   "values": {"load_balancer_arn": "lb-other", "protocol": "HTTP", "port": 80}}),
            json!({"type": "target-group-attachment",
                   "values": {"target_group_arn": "arn:elb:targetgroup/web-tg/abc",
                              "target_id": "i-1"}}),
            json!({"type": "target-group-attachment",
                   "values": {"target_group_arn": "arn:elb:targetgroup/web-tg/abc",
                              "target_id": "i-2"}}),
        ]);

        let sections = assemble(state.root_module());
        let lb = sections
            .iter()
            .find(|s| s.kind == SectionKind::LoadBalancer)
            .expect("load balancer section");

        assert_eq!(lb.body["scheme"], "Internet-facing");
        assert_eq!(lb.body["lb_type"], "Application");
        let listeners = lb.body["listeners"].as_array().expect("listeners");
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners[0]["protocol_port"], "HTTPS:443");
        assert_eq!(listeners[0]["redirect_to"], "web-tg");
        assert_eq!(listeners[0]["target"], "i-1, i-2");
    }

    #[test]
    fn malformed_load_balancer_does_not_abort_the_rest() {
        let state = state_from(vec![
            json!({"type": "load-balancer", "values": {"name": "no-arn"}}),
            json!({"type": "database-instance",
                   "values": {"identifier": "db-1", "engine": "postgres"}}),
        ]);

        let sections = assemble(state.root_module());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::DatabaseInstance);
        assert_eq!(sections[0].body["engine_title"], "Amazon Postgres");
        assert_eq!(sections[0].body["role"], "Writer Instance");
    }

    #[test]
    fn encryption_key_resolves_alias_or_not_available() {
        let state = state_from(vec![
            json!({"type": "encryption-key",
                   "values": {"id": "key-1", "description": "prod data"}}),
            json!({"type": "encryption-key", "values": {"id": "key-2"}}),
            json!({"type": "encryption-key-alias",
                   "values": {"target_key_id": "key-1", "name": "alias/prod-key"}}),
        ]);

        let sections = assemble(state.root_module());
        assert_eq!(sections[0].body["alias"], "prod-key");
        assert_eq!(sections[1].body["alias"], "N/A");
    }

    #[test]
    fn generate_rejects_rootless_input_only() {
        assert!(generate_html_from_str(r#"{"values": {}}"#).is_err());
        assert!(generate_html_from_str("garbage").is_err());
        assert!(
            generate_html_from_str(r#"{"values": {"root_module": {}}}"#).is_ok()
        );
    }
}
