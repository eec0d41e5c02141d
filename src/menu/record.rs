//! Conversion between menu items and config file records
//!
//! Records are YAML mappings:
//! - separator: `{type: separator}`
//! - host: `{type: host, title, sshparams, geometry, enable_bcvi?, ...}`
//! - menu: `{type: menu, title, items: [...]}`
//!
//! Only host records keep extension fields: every unrecognized key on a host
//! survives a load/save cycle. Separator and menu records are rebuilt from
//! their schema keys alone. `enable_bcvi` is only written when set.

use super::errors::UnknownItemType;
use super::item::{HostItem, Item, ItemKind, MenuItem};
use crate::log_warn;
use serde_yml::{Mapping, Value};

/// Generic string-keyed record as stored in the config file.
pub type Record = Mapping;

const TYPE_KEY: &str = "type";
const TITLE_KEY: &str = "title";
const SSHPARAMS_KEY: &str = "sshparams";
const GEOMETRY_KEY: &str = "geometry";
const ALT_TRANSPORT_KEY: &str = "enable_bcvi";
const ITEMS_KEY: &str = "items";

const HOST_KEYS: [&str; 5] = [TYPE_KEY, TITLE_KEY, SSHPARAMS_KEY, GEOMETRY_KEY, ALT_TRANSPORT_KEY];

/// Builds one item from a record.
///
/// Unknown nested records inside a menu are logged and dropped; an unknown
/// type on this record itself is returned as the error.
pub fn item_from_record(record: &Value) -> Result<Item, UnknownItemType> {
    let mut warnings = Vec::new();
    let item = build_item(record, &mut warnings);
    for warning in &warnings {
        log_warn!("{}", warning);
    }
    item
}

/// Builds a tree from an ordered list of records, dropping unknown types.
pub fn tree_from_records(records: &[Value]) -> Vec<Item> {
    tree_from_records_with_warnings(records).0
}

/// Same as [`tree_from_records`] but also returns a diagnostic per dropped record
/// (nested ones included), in encounter order.
pub fn tree_from_records_with_warnings(records: &[Value]) -> (Vec<Item>, Vec<UnknownItemType>) {
    let mut warnings = Vec::new();
    let items = build_items(records, &mut warnings);
    for warning in &warnings {
        log_warn!("{}", warning);
    }
    (items, warnings)
}

pub fn item_to_record(item: &Item) -> Record {
    match item {
        Item::Separator => {
            let mut record = Mapping::new();
            put_str(&mut record, TYPE_KEY, ItemKind::Separator.as_str());
            record
        }
        Item::Host(host) => host_to_record(host),
        Item::Menu(menu) => menu_to_record(menu),
    }
}

pub fn tree_to_records(items: &[Item]) -> Vec<Value> {
    items.iter().map(|item| Value::Mapping(item_to_record(item))).collect()
}

fn build_items(records: &[Value], warnings: &mut Vec<UnknownItemType>) -> Vec<Item> {
    let mut items = Vec::with_capacity(records.len());
    for record in records {
        match build_item(record, warnings) {
            Ok(item) => items.push(item),
            Err(warning) => warnings.push(warning),
        }
    }
    items
}

fn build_item(record: &Value, warnings: &mut Vec<UnknownItemType>) -> Result<Item, UnknownItemType> {
    let type_name = record.get(TYPE_KEY).and_then(scalar_to_string).unwrap_or_default();

    match ItemKind::from_type_name(&type_name) {
        Some(ItemKind::Separator) => Ok(Item::Separator),
        Some(ItemKind::Host) => Ok(Item::Host(host_from_value(record))),
        Some(ItemKind::Menu) => Ok(Item::Menu(menu_from_value(record, warnings))),
        None => Err(UnknownItemType { type_name }),
    }
}

fn host_from_value(record: &Value) -> HostItem {
    match record.as_mapping() {
        Some(mapping) => host_from_record(mapping),
        None => HostItem::default(),
    }
}

pub(super) fn host_from_record(record: &Record) -> HostItem {
    let mut extra = Mapping::new();
    for (key, value) in record {
        let is_known = key.as_str().is_some_and(|name| HOST_KEYS.contains(&name));
        if !is_known {
            extra.insert(key.clone(), value.clone());
        }
    }

    HostItem {
        title: string_field(record, TITLE_KEY).unwrap_or_default(),
        sshparams: string_field(record, SSHPARAMS_KEY).unwrap_or_default(),
        geometry: string_field(record, GEOMETRY_KEY),
        enable_alt_transport: record.get(ALT_TRANSPORT_KEY).is_some_and(is_truthy),
        extra,
    }
}

pub(super) fn host_to_record(host: &HostItem) -> Record {
    let mut record = Mapping::new();
    put_str(&mut record, TYPE_KEY, ItemKind::Host.as_str());
    put_str(&mut record, TITLE_KEY, &host.title);
    put_str(&mut record, SSHPARAMS_KEY, &host.sshparams);
    let geometry = match &host.geometry {
        Some(geometry) => Value::String(geometry.clone()),
        None => Value::Null,
    };
    record.insert(key(GEOMETRY_KEY), geometry);
    if host.enable_alt_transport {
        record.insert(key(ALT_TRANSPORT_KEY), Value::Bool(true));
    }
    for (extra_key, value) in &host.extra {
        record.insert(extra_key.clone(), value.clone());
    }
    record
}

fn menu_from_value(record: &Value, warnings: &mut Vec<UnknownItemType>) -> MenuItem {
    let title = record.get(TITLE_KEY).and_then(scalar_to_string).unwrap_or_default();
    let items = match record.get(ITEMS_KEY).and_then(Value::as_sequence) {
        Some(children) => build_items(children, warnings),
        None => Vec::new(),
    };
    MenuItem { title, items }
}

fn menu_to_record(menu: &MenuItem) -> Record {
    let mut record = Mapping::new();
    put_str(&mut record, TYPE_KEY, ItemKind::Menu.as_str());
    put_str(&mut record, TITLE_KEY, &menu.title);
    record.insert(key(ITEMS_KEY), Value::Sequence(tree_to_records(&menu.items)));
    record
}

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

fn put_str(record: &mut Mapping, name: &str, value: &str) {
    record.insert(key(name), Value::String(value.to_string()));
}

fn string_field(record: &Record, name: &str) -> Option<String> {
    record.get(name).and_then(scalar_to_string)
}

/// Renders a scalar as text. `Null` and collections yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Only `null` and `false` count as unset.
fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

#[cfg(test)]
#[path = "../test/menu/record.rs"]
mod tests;
