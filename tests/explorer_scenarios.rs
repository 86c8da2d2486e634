//! End-to-end behaviour of the explorer on realistic connections files

mod common;

use common::{csv_text, Row};
use contact_graph::import::{self, Column};
use contact_graph::{build_graph, Command, Explorer, NodeId, Outcome, Record};

fn jane_and_legend() -> Vec<Record> {
    vec![
        Record::new()
            .with(Column::FirstName, "Jane")
            .with(Column::LastName, "Doe")
            .with(Column::Company, "Acme")
            .with(Column::Position, "Eng")
            .with(Column::ConnectedOn, "01 Jan 2020"),
        Record::new().with(Column::FirstName, "Notes:"),
    ]
}

#[test]
fn legend_row_scenario_builds_two_nodes_and_one_edge() {
    let records = import::retain_contacts(jane_and_legend());
    let built = build_graph(&records);

    let ids: Vec<&str> = built.snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["central", "node_0"]);
    assert_eq!(built.snapshot.edge_count(), 1);
    assert_eq!(built.snapshot.edges[0].id.as_str(), "edge_0");
    assert_eq!(built.snapshot.edges[0].label, "Connected: 01 Jan 2020");
}

#[test]
fn legend_row_scenario_export_stats() {
    let mut explorer = Explorer::new();
    explorer.load_records(jane_and_legend());

    let json = serde_json::to_value(explorer.export_document()).unwrap();
    assert_eq!(
        json["stats"],
        serde_json::json!({"totalConnections": 1, "totalNodes": 2, "totalEdges": 1})
    );
}

#[test]
fn same_scenario_from_csv_text() {
    let text = csv_text(&[
        Row::named("Jane", "Doe")
            .company("Acme")
            .position("Eng")
            .connected_on("01 Jan 2020"),
        Row::named("Notes:", ""),
    ]);
    let mut explorer = Explorer::new();
    let outcome = explorer.handle(Command::LoadFile(text)).unwrap();

    assert!(matches!(outcome, Outcome::Loaded { connections: 1, .. }));
    assert_eq!(explorer.canonical().node_count(), 2);
    assert_eq!(explorer.export_document().stats.total_connections, 1);
}

#[test]
fn blank_first_name_rows_are_dropped_before_indexing() {
    let records = vec![
        Record::new().with(Column::FirstName, "Ann"),
        Record::new().with(Column::FirstName, "   ").with(Column::LastName, "Ghost"),
        Record::new().with(Column::FirstName, "Bob"),
    ];
    let mut explorer = Explorer::new();
    assert_eq!(explorer.load_records(records), 2);

    // Bob moves up to index 1 once the blank row is gone
    let ids: Vec<&str> = explorer.canonical().nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["central", "node_0", "node_1"]);
    assert_eq!(explorer.export_document().stats.total_connections, 2);
}

#[test]
fn skipped_index_leaves_a_gap_in_ids() {
    let records = vec![
        Record::new().with(Column::FirstName, "Ann"),
        Record::new().with(Column::LastName, "Nofirst"),
        Record::new().with(Column::FirstName, "Bob"),
    ];
    // Built directly: the middle record has no first name but a last name,
    // so it still gets a node.
    let built = build_graph(&records);
    assert_eq!(built.snapshot.node_count(), 4);

    let records = vec![
        Record::new().with(Column::FirstName, "Ann"),
        Record::new(),
        Record::new().with(Column::FirstName, "Bob"),
    ];
    let built = build_graph(&records);
    let ids: Vec<&str> = built.snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["central", "node_0", "node_2"]);
}

#[test]
fn conjunctive_filter_through_commands() {
    let text = csv_text(&[
        Row::named("A", "One").company("Acme").position("Eng"),
        Row::named("B", "Two").company("Acme").position("Sales"),
    ]);
    let mut explorer = Explorer::new();
    explorer.handle(Command::LoadFile(text)).unwrap();

    explorer
        .handle(Command::Filter {
            company: "acme".into(),
            position: "eng".into(),
            date: String::new(),
        })
        .unwrap();
    let ids: Vec<&str> = explorer.display().nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["central", "node_0"]);
}

#[test]
fn uppercase_search_finds_mixed_case_company() {
    let text = csv_text(&[
        Row::named("Jane", "Doe").company("Acme Corp"),
        Row::named("Bob", "Ray").company("Globex"),
    ]);
    let mut explorer = Explorer::new();
    explorer.load_text(&text).unwrap();

    let shown = explorer.search("ACME");
    assert!(shown.contains_node(&NodeId::contact(0)));
    assert!(!shown.contains_node(&NodeId::contact(1)));
    assert!(shown.contains_node(&NodeId::central()));
}

#[test]
fn reset_after_query_restores_everything() {
    let text = csv_text(&[
        Row::named("Jane", "Doe").company("Acme"),
        Row::named("Bob", "Ray").company("Globex"),
    ]);
    let mut explorer = Explorer::new();
    explorer.load_text(&text).unwrap();
    explorer.search("globex");
    explorer.handle(Command::SelectNode(NodeId::contact(1))).unwrap();

    let outcome = explorer.handle(Command::Reset).unwrap();
    assert!(matches!(outcome, Outcome::Reset(stats) if stats.visible_contacts == 2));
    assert_eq!(explorer.display(), explorer.canonical());
    assert_eq!(explorer.selected(), None);
}

#[test]
fn selecting_shows_full_untruncated_name() {
    let text = csv_text(&[Row::named("Bartholomew", "Fitzgerald-Hayes")
        .company("Initech, Inc.")
        .url("https://www.linkedin.com/in/bfh")]);
    let mut explorer = Explorer::new();
    explorer.load_text(&text).unwrap();

    assert_eq!(explorer.canonical().nodes[1].label, "Bartholomew Fitzgera…");
    match explorer.handle(Command::SelectNode(NodeId::contact(0))).unwrap() {
        Outcome::Selected(details) => {
            assert_eq!(details.get("Name"), Some("Bartholomew Fitzgerald-Hayes"));
            assert_eq!(details.get("Company"), Some("Initech, Inc."));
            assert_eq!(details.get("Profile"), Some("https://www.linkedin.com/in/bfh"));
            assert_eq!(details.get("Position"), Some("Unknown Position"));
        }
        other => panic!("expected a selection, got {:?}", other),
    }
}

#[test]
fn bad_file_keeps_previous_data() {
    let mut explorer = Explorer::new();
    explorer
        .load_text(&csv_text(&[Row::named("Jane", "Doe")]))
        .unwrap();

    assert!(explorer.handle(Command::LoadFile(String::new())).is_err());
    assert_eq!(explorer.connection_count(), 1);
    assert_eq!(explorer.canonical().node_count(), 2);
}

#[test]
fn garbage_queries_are_harmless() {
    let mut explorer = Explorer::new();
    explorer
        .load_text(&csv_text(&[Row::named("Jane", "Doe")]))
        .unwrap();

    for query in ["\u{0}", "%%%", "(((", "\"", "  \t  "] {
        let shown = explorer.search(query);
        assert!(shown.contains_node(&NodeId::central()));
        assert!(shown.is_closed());
    }
    let shown = explorer.filter("[", "*", "?");
    assert_eq!(shown.node_count(), 1);
}
