use serde_json::json;
use std::error::Error;
use std::fmt::Write;

use crate::report::{Section, SectionKind};

/// Renders the full report document: fixed boilerplate heading, then every
/// section in order, with a group heading emitted once before the first
/// section of the kinds that share one.
pub fn render_report(sections: &[Section]) -> Result<String, Box<dyn Error>> {
    let mut body = String::new();
    let mut last_kind: Option<SectionKind> = None;

    for section in sections {
        if last_kind != Some(section.kind) {
            if let Some(heading) = group_heading(section.kind) {
                writeln!(body, "<h1>{heading}</h1>")?;
            }
        }

        let fragment = match section.kind {
            SectionKind::Vpc => super::vpc::render(&section.body)?,
            SectionKind::Subnets => super::subnets::render(&section.body)?,
            SectionKind::RouteTable => super::route_tables::render(&section.body)?,
            SectionKind::InternetGateway => super::internet_gateways::render(&section.body)?,
            SectionKind::NatGateway => super::nat_gateways::render(&section.body)?,
            SectionKind::ComputeInstance => super::compute::render(&section.body)?,
            SectionKind::LoadBalancer => super::load_balancers::render(&section.body)?,
            SectionKind::TargetGroup => super::target_groups::render(&section.body)?,
            SectionKind::DatabaseInstance => super::databases::render(&section.body)?,
            SectionKind::EncryptionKey => super::encryption_keys::render(&section.body)?,
        };
        body.push_str(&fragment);
        last_kind = Some(section.kind);
    }

    super::renderer::render_template(&json!({ "body": body }), &get_shell_template())
}

fn group_heading(kind: SectionKind) -> Option<&'static str> {
    match kind {
        SectionKind::RouteTable => Some("Routing"),
        SectionKind::InternetGateway => Some("Internet Gateways"),
        SectionKind::NatGateway => Some("NAT Gateways"),
        SectionKind::TargetGroup => Some("Target Groups"),
        SectionKind::EncryptionKey => Some("Encryption Keys"),
        _ => None,
    }
}

pub fn get_shell_template() -> String {
    let template = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Infrastructure Technical Report</title>
<style>
  body { font-family: Calibri, sans-serif; margin: 2em; }
  table.resource { border-collapse: collapse; margin-bottom: 1.5em; width: 100%; page-break-inside: avoid; }
  table.resource td, table.resource th { border: 1px solid #444; padding: 4px 8px; }
  th.shaded { background-color: #00A9ED; text-align: center; }
  td.side { text-align: center; vertical-align: middle; font-weight: bold; }
</style>
</head>
<body>
<h1>Infrastructure Technical Report</h1>
<p>This document contains a detailed summary of the described infrastructure.</p>
{{{body}}}
</body>
</html>
"##;

    template.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_report_is_boilerplate_only() {
        let html = render_report(&[]).expect("renders");
        assert!(html.contains("Infrastructure Technical Report"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn group_heading_appears_once_per_run_of_sections() {
        let sections = vec![
            Section {
                kind: SectionKind::RouteTable,
                body: json!({"name": "alpha", "vpc_id": "vpc-1",
                             "route_count": 0, "routes": []}),
            },
            Section {
                kind: SectionKind::RouteTable,
                body: json!({"name": "beta", "vpc_id": "vpc-1",
                             "route_count": 0, "routes": []}),
            },
        ];

        let html = render_report(&sections).expect("renders");
        assert_eq!(html.matches("<h1>Routing</h1>").count(), 1);
        assert!(html.contains("Route Table: alpha"));
        assert!(html.contains("Route Table: beta"));
    }

    #[test]
    fn vpc_section_renders_role_rows() {
        let sections = vec![Section {
            kind: SectionKind::Vpc,
            body: json!({
                "id": "vpc-1",
                "name": "core",
                "cidr_block": "10.0.0.0/16",
                "route_tables": {
                    "default": "main", "public": "rtb-pub",
                    "private": "N/A", "rds": "N/A"
                },
            }),
        }];

        let html = render_report(&sections).expect("renders");
        assert!(html.contains("vpc-1"));
        assert!(html.contains("rtb-pub"));
        assert!(html.contains("10.0.0.0/16"));
    }

    #[test]
    fn target_group_without_instances_renders_placeholder_row() {
        let sections = vec![Section {
            kind: SectionKind::TargetGroup,
            body: json!({
                "name": "web-tg", "target_type": "Instance",
                "protocol": "HTTP", "port": "80", "instances": [],
            }),
        }];

        let html = render_report(&sections).expect("renders");
        assert!(html.contains("No attached instances"));
    }
}
