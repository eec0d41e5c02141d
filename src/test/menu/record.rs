use super::{item_from_record, item_to_record, tree_from_records, tree_from_records_with_warnings, tree_to_records};
use crate::menu::{HostItem, Item};
use serde_yml::Value;

fn records(yaml: &str) -> Vec<Value> {
    serde_yml::from_str(yaml).expect("valid yaml")
}

fn record(yaml: &str) -> Value {
    serde_yml::from_str(yaml).expect("valid yaml")
}

#[test]
fn separator_record_discards_extra_keys() {
    let item = item_from_record(&record("type: separator\nextra: cheese\n")).expect("separator");
    assert!(item.is_separator());

    let out = item_to_record(&item);
    assert_eq!(out.get("type").and_then(Value::as_str), Some("separator"));
    assert!(out.get("extra").is_none(), "extra keys are discarded");
}

#[test]
fn host_record_keeps_known_and_unknown_fields() {
    let item = item_from_record(&record(
        "type: host\ntitle: Example\nsshparams: -Ax bob@example.com\ngeometry: 80x25\nenable_bcvi: true\nextra: read all about it\n",
    ))
    .expect("host");
    let host = item.as_host().expect("host variant");
    assert_eq!(host.title, "Example");
    assert_eq!(host.sshparams, "-Ax bob@example.com");
    assert_eq!(host.geometry.as_deref(), Some("80x25"));
    assert!(host.enable_alt_transport);

    let out = item_to_record(&item);
    assert_eq!(out.get("extra").and_then(Value::as_str), Some("read all about it"));
    assert_eq!(out.get("enable_bcvi").and_then(Value::as_bool), Some(true));
}

#[test]
fn alt_transport_flag_is_omitted_when_false() {
    let item = item_from_record(&record("type: host\ntitle: Tail Log\nsshparams: webserver\nenable_bcvi: true\n")).expect("host");
    let mut host = item.as_host().cloned().expect("host variant");
    host.enable_alt_transport = false;

    let out = item_to_record(&Item::Host(host));
    assert!(!out.contains_key("enable_bcvi"));
    assert_eq!(out.get("title").and_then(Value::as_str), Some("Tail Log"));
}

#[test]
fn unknown_types_are_dropped_without_stopping_siblings() {
    let (items, warnings) = tree_from_records_with_warnings(&records(
        "- type: host\n  title: A\n  sshparams: a\n- type: bogus\n- title: untyped\n- type: separator\n",
    ));
    assert_eq!(items.len(), 2);
    assert!(items[0].is_host());
    assert!(items[1].is_separator());
    let names: Vec<&str> = warnings.iter().map(|warning| warning.type_name.as_str()).collect();
    assert_eq!(names, vec!["bogus", ""]);
}

#[test]
fn unknown_type_is_reported_for_single_record() {
    let err = item_from_record(&record("type: launcher\n")).expect_err("unknown type");
    assert_eq!(err.type_name, "launcher");
    assert_eq!(err.to_string(), "Ignoring item of unknown type 'launcher'");
}

#[test]
fn nested_menus_keep_child_order() {
    let tree = tree_from_records(&records(
        "- type: menu\n  title: Outer\n  items:\n    - type: host\n      title: B\n      sshparams: b\n    - type: menu\n      title: Inner\n      items:\n        - type: host\n          title: C\n          sshparams: c\n    - type: host\n      title: A\n      sshparams: a\n",
    ));
    let outer = tree[0].as_menu().expect("menu");
    assert_eq!(outer.title, "Outer");
    let titles: Vec<Option<&str>> = outer.items.iter().map(Item::title).collect();
    assert_eq!(titles, vec![Some("B"), Some("Inner"), Some("A")]);
    let inner = outer.items[1].as_menu().expect("inner menu");
    assert_eq!(inner.items[0].title(), Some("C"));
}

#[test]
fn tree_round_trip_is_structurally_equal() {
    let source = records(
        "- type: host\n  title: Example\n  sshparams: LANG=\"C\" example.com\n  geometry: ''\n  profile: Dev\n  colour: blue\n- type: separator\n- type: menu\n  title: Sub Menu\n  items:\n    - type: host\n      title: Host A\n      sshparams: hosta\n      enable_bcvi: true\n    - type: menu\n      title: Empty\n      items: []\n",
    );
    let tree = tree_from_records(&source);
    let again = tree_from_records(&tree_to_records(&tree));
    assert_eq!(again, tree);

    let host = again[0].as_host().expect("host");
    assert_eq!(host.profile(), Some("Dev"));
    assert_eq!(host.extra().get("colour").and_then(Value::as_str), Some("blue"));
}

#[test]
fn false_alt_transport_normalizes_on_both_sides() {
    let tree = tree_from_records(&records("- type: host\n  title: A\n  sshparams: a\n  enable_bcvi: false\n"));
    let again = tree_from_records(&tree_to_records(&tree));
    assert_eq!(again, tree);
    assert_eq!(again[0], Item::Host(HostItem::new("A", "a")));
}

#[test]
fn numeric_titles_are_read_as_text() {
    let item = item_from_record(&record("type: host\ntitle: 42\nsshparams: 10.0.0.42\n")).expect("host");
    assert_eq!(item.title(), Some("42"));
}
