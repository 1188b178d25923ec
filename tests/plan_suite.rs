use std::path::Path;

use stackdeck::{
    compute_plan, parse_compose, render_svg, ConnectorKind, DiagramPlan, LayoutConfig, PaintOp,
    Rect, ServiceNode, Theme, Tier,
};

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("fixture read failed")
}

fn plan_fixture(name: &str) -> DiagramPlan {
    let nodes = parse_compose(&fixture(name)).expect("parse failed");
    compute_plan(&nodes, &Theme::classic(), &LayoutConfig::default()).expect("plan failed")
}

fn connectors(plan: &DiagramPlan) -> Vec<&stackdeck::ConnectorPlan> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::Connector { connector, .. } => Some(connector),
            _ => None,
        })
        .collect()
}

fn node_rects(plan: &DiagramPlan) -> Vec<Rect> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::Node { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .collect()
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "single.yaml",
        "three_tier.yaml",
        "wrap.yaml",
        "side_by_side.yaml",
        "empty.yaml",
        "full_stack.yaml",
    ];

    for name in candidates {
        let plan = plan_fixture(name);
        let svg = render_svg(&plan, &Theme::classic());
        assert_valid_svg(&svg, name);
    }
}

#[test]
fn single_service_sits_centered_at_the_top_margin() {
    let plan = plan_fixture("single.yaml");

    let bounds = plan.node_bounds("worker").expect("worker placed");
    assert_eq!(bounds.x, (1920.0 - 200.0) / 2.0);
    assert_eq!(bounds.y, 100.0);
    assert_eq!(bounds.width, 200.0);
    assert_eq!(bounds.height, 100.0);
    assert!(connectors(&plan).is_empty());
}

#[test]
fn three_tier_chain_waterfalls_downward() {
    let plan = plan_fixture("three_tier.yaml");

    let web = plan.node_bounds("web").unwrap();
    let api = plan.node_bounds("api").unwrap();
    let db = plan.node_bounds("db").unwrap();
    assert!(web.y < api.y && api.y < db.y);

    let routed = connectors(&plan);
    assert_eq!(routed.len(), 2);
    for connector in &routed {
        assert_eq!(connector.kind, ConnectorKind::Waterfall);
        assert!(connector.start.y < connector.end.y, "chain must flow down");
    }

    // anchors hang off the box edges, not the centers
    let web_to_api = routed.iter().find(|c| c.from == "web").unwrap();
    assert_eq!(web_to_api.start.y, web.bottom());
    assert_eq!(web_to_api.end.y, api.top());
    assert_eq!(web_to_api.start.x, web.center_x());
}

#[test]
fn twelve_services_wrap_into_rows_of_five() {
    let plan = plan_fixture("wrap.yaml");

    let rects = node_rects(&plan);
    assert_eq!(rects.len(), 12);

    let mut rows: std::collections::BTreeMap<i64, Vec<Rect>> = std::collections::BTreeMap::new();
    for rect in rects {
        rows.entry(rect.y as i64).or_default().push(rect);
    }
    let counts: Vec<usize> = rows.values().map(Vec::len).collect();
    assert_eq!(counts, vec![5, 5, 2]);

    // the short final row is centered on its own
    let last_row = rows.values().last().unwrap();
    let left = last_row.iter().map(|r| r.x).fold(f32::INFINITY, f32::min);
    assert_eq!(left, (1920.0 - (2.0 * 200.0 + 50.0)) / 2.0);
}

#[test]
fn same_row_neighbors_connect_center_to_center() {
    let plan = plan_fixture("side_by_side.yaml");

    let alpha = plan.node_bounds("alpha").unwrap();
    let beta = plan.node_bounds("beta").unwrap();
    assert_eq!(alpha.y, beta.y);
    assert!(alpha.x < beta.x, "manifest order is kept left to right");

    let routed = connectors(&plan);
    assert_eq!(routed.len(), 1);
    let link = routed[0];
    assert_eq!(link.kind, ConnectorKind::Straight);
    assert_eq!(link.start.x, alpha.center_x());
    assert_eq!(link.start.y, alpha.center_y());
    assert_eq!(link.end.x, beta.center_x());
    assert_eq!(link.end.y, beta.center_y());
}

#[test]
fn empty_manifest_yields_exactly_one_placeholder() {
    for input in [fixture("empty.yaml"), String::new()] {
        let nodes = parse_compose(&input).expect("parse failed");
        let plan =
            compute_plan(&nodes, &Theme::classic(), &LayoutConfig::default()).expect("plan failed");

        let placeholders = plan
            .ops
            .iter()
            .filter(|op| matches!(op, PaintOp::Placeholder { .. }))
            .count();
        assert_eq!(placeholders, 1);
        assert!(node_rects(&plan).is_empty());
        assert!(connectors(&plan).is_empty());
    }
}

#[test]
fn full_stack_classifies_into_three_bands() {
    let plan = plan_fixture("full_stack.yaml");

    let tier_of = |id: &str| {
        plan.ops
            .iter()
            .find_map(|op| match op {
                PaintOp::Node { id: node, tier, .. } if node == id => Some(*tier),
                _ => None,
            })
            .unwrap_or_else(|| panic!("{id} missing from plan"))
    };

    assert_eq!(tier_of("load-balancer"), Tier::Frontend);
    assert_eq!(tier_of("web-app"), Tier::Frontend);
    assert_eq!(tier_of("api"), Tier::Middle);
    assert_eq!(tier_of("auth-service"), Tier::Middle);
    assert_eq!(tier_of("payment-service"), Tier::Middle);
    assert_eq!(tier_of("users-db"), Tier::Data);
    assert_eq!(tier_of("mysql"), Tier::Data);
    assert_eq!(tier_of("redis"), Tier::Data);

    // every link in the fixture resolves, including the long-form map
    assert_eq!(connectors(&plan).len(), 7);
}

#[test]
fn no_two_nodes_overlap() {
    for name in ["wrap.yaml", "full_stack.yaml", "three_tier.yaml"] {
        let rects = node_rects(&plan_fixture(name));
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.intersects(b), "{name}: {a:?} overlaps {b:?}");
            }
        }
    }
}

#[test]
fn unresolved_references_drop_their_connectors_only() {
    let manifest = "services:\n  api:\n    image: corp/api:1\n    depends_on:\n      - warehouse\n";
    let nodes = parse_compose(manifest).expect("parse failed");
    let plan =
        compute_plan(&nodes, &Theme::classic(), &LayoutConfig::default()).expect("plan failed");

    assert!(plan.node_bounds("api").is_some());
    assert!(connectors(&plan).is_empty());
}

#[test]
fn plans_serialize_identically_across_runs() {
    let nodes = parse_compose(&fixture("full_stack.yaml")).expect("parse failed");
    let theme = Theme::classic();
    let config = LayoutConfig::default();

    let first = compute_plan(&nodes, &theme, &config).expect("plan failed");
    let second = compute_plan(&nodes, &theme, &config).expect("plan failed");
    assert_eq!(
        first.to_json().expect("serialize"),
        second.to_json().expect("serialize")
    );
}

#[test]
fn narrow_config_wraps_earlier() {
    let nodes = parse_compose(&fixture("wrap.yaml")).expect("parse failed");
    let config = LayoutConfig {
        max_nodes_per_row: 4,
        canvas_width: 1200.0,
        ..LayoutConfig::default()
    };
    let plan = compute_plan(&nodes, &Theme::classic(), &config).expect("plan failed");

    let ys: std::collections::BTreeSet<i64> =
        node_rects(&plan).iter().map(|r| r.y as i64).collect();
    assert_eq!(ys.len(), 3, "12 services over rows of 4");
    assert_eq!(plan.width, 1200.0);
}

#[test]
fn library_input_does_not_require_the_parser() {
    let nodes = vec![
        ServiceNode::new("edge", "haproxy:2.9").with_links(["svc"]),
        ServiceNode::new("svc", "corp/svc:3"),
    ];
    let plan =
        compute_plan(&nodes, &Theme::classic(), &LayoutConfig::default()).expect("plan failed");
    assert_eq!(tiers_in_plan(&plan), vec![Tier::Frontend, Tier::Middle]);
}

fn tiers_in_plan(plan: &DiagramPlan) -> Vec<Tier> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::Node { tier, .. } => Some(*tier),
            _ => None,
        })
        .collect()
}
