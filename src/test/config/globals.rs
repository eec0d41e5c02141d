use super::{DEFAULT_ENTRY_WIDTH, DEFAULT_TOOLTIP, Globals};
use serde_yml::{Mapping, Number, Value};

fn globals(yaml: &str) -> Globals {
    let mapping: Mapping = serde_yml::from_str(yaml).expect("valid yaml");
    Globals::from_mapping(mapping)
}

#[test]
fn defaults_apply_to_an_empty_section() {
    let globals = Globals::default();
    assert_eq!(globals.tooltip(), DEFAULT_TOOLTIP);
    assert_eq!(globals.entry_width(), DEFAULT_ENTRY_WIDTH);
    assert!(!globals.hide_border());
    assert!(!globals.back_up_config());
}

#[test]
fn null_tooltip_is_replaced_but_custom_text_is_kept() {
    assert_eq!(globals("tooltip: ~\n").tooltip(), DEFAULT_TOOLTIP);
    assert_eq!(globals("tooltip: My hosts\n").tooltip(), "My hosts");
}

#[test]
fn flags_read_zero_and_false_as_disabled() {
    let globals = globals("hide_border: 0\nmenus_tearoff: 1\nshow_entry: false\nmenus_open_all: yes please\nback_up_config: ~\n");
    assert!(!globals.hide_border());
    assert!(globals.menus_tearoff());
    assert!(!globals.show_entry());
    assert!(globals.menus_open_all());
    assert!(!globals.back_up_config());
    assert!(!globals.menus_open_tabs());
}

#[test]
fn flags_are_written_as_numbers() {
    let mut globals = Globals::default();
    globals.set_show_entry(true);
    globals.set_hide_border(false);

    assert_eq!(globals.get("show_entry"), Some(&Value::Number(Number::from(1))));
    assert_eq!(globals.get("hide_border"), Some(&Value::Number(Number::from(0))));
    assert!(globals.show_entry());
}

#[test]
fn entry_width_round_trips() {
    let mut globals = Globals::default();
    globals.set_entry_width(120);
    assert_eq!(globals.entry_width(), 120);
}
