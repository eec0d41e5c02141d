//! Options stored in the `global` section of the config file.
//!
//! Boolean options are persisted as `0`/`1`. Any other value present under a
//! flag key counts as enabled unless it is `null`, `false` or numeric zero.

use serde_yml::{Mapping, Number, Value};

pub const DEFAULT_TOOLTIP: &str = "Open an SSH session in a new window";
pub const DEFAULT_ENTRY_WIDTH: i64 = 70;

const TOOLTIP_KEY: &str = "tooltip";
const ENTRY_WIDTH_KEY: &str = "entry_width";
const HIDE_BORDER_KEY: &str = "hide_border";
const MENUS_TEAROFF_KEY: &str = "menus_tearoff";
const MENUS_OPEN_ALL_KEY: &str = "menus_open_all";
const MENUS_OPEN_TABS_KEY: &str = "menus_open_tabs";
const SHOW_ENTRY_KEY: &str = "show_entry";
const BACK_UP_CONFIG_KEY: &str = "back_up_config";

#[derive(Debug, Clone, PartialEq)]
pub struct Globals {
    values: Mapping,
}

impl Default for Globals {
    fn default() -> Self {
        Self::from_mapping(Mapping::new())
    }
}

impl Globals {
    /// Wraps a loaded `global` section, filling in the tooltip when it is unset.
    pub fn from_mapping(mut values: Mapping) -> Self {
        let has_tooltip = values.get(TOOLTIP_KEY).is_some_and(|value| !matches!(value, Value::Null | Value::Bool(false)));
        if !has_tooltip {
            values.insert(key(TOOLTIP_KEY), Value::String(DEFAULT_TOOLTIP.to_string()));
        }
        Self { values }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(key(name), value);
    }

    pub fn flag(&self, name: &str) -> bool {
        match self.values.get(name) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::Number(number)) => number.as_f64() != Some(0.0),
            Some(_) => true,
        }
    }

    pub fn set_flag(&mut self, name: &str, enabled: bool) {
        self.set(name, Value::Number(Number::from(i64::from(enabled))));
    }

    pub fn tooltip(&self) -> &str {
        self.values.get(TOOLTIP_KEY).and_then(Value::as_str).unwrap_or(DEFAULT_TOOLTIP)
    }

    pub fn set_tooltip(&mut self, text: &str) {
        self.set(TOOLTIP_KEY, Value::String(text.to_string()));
    }

    /// Persisted width of the text entry box.
    pub fn entry_width(&self) -> i64 {
        self.values.get(ENTRY_WIDTH_KEY).and_then(Value::as_i64).unwrap_or(DEFAULT_ENTRY_WIDTH)
    }

    pub fn set_entry_width(&mut self, width: i64) {
        self.set(ENTRY_WIDTH_KEY, Value::Number(Number::from(width)));
    }

    pub fn hide_border(&self) -> bool {
        self.flag(HIDE_BORDER_KEY)
    }

    pub fn set_hide_border(&mut self, enabled: bool) {
        self.set_flag(HIDE_BORDER_KEY, enabled);
    }

    pub fn menus_tearoff(&self) -> bool {
        self.flag(MENUS_TEAROFF_KEY)
    }

    pub fn set_menus_tearoff(&mut self, enabled: bool) {
        self.set_flag(MENUS_TEAROFF_KEY, enabled);
    }

    /// Sub-menus get an "Open all windows" entry.
    pub fn menus_open_all(&self) -> bool {
        self.flag(MENUS_OPEN_ALL_KEY)
    }

    pub fn set_menus_open_all(&mut self, enabled: bool) {
        self.set_flag(MENUS_OPEN_ALL_KEY, enabled);
    }

    /// Sub-menus get an "Open all as tabs" entry (tab-capable terminals only).
    pub fn menus_open_tabs(&self) -> bool {
        self.flag(MENUS_OPEN_TABS_KEY)
    }

    pub fn set_menus_open_tabs(&mut self, enabled: bool) {
        self.set_flag(MENUS_OPEN_TABS_KEY, enabled);
    }

    pub fn show_entry(&self) -> bool {
        self.flag(SHOW_ENTRY_KEY)
    }

    pub fn set_show_entry(&mut self, enabled: bool) {
        self.set_flag(SHOW_ENTRY_KEY, enabled);
    }

    pub fn back_up_config(&self) -> bool {
        self.flag(BACK_UP_CONFIG_KEY)
    }

    pub fn set_back_up_config(&mut self, enabled: bool) {
        self.set_flag(BACK_UP_CONFIG_KEY, enabled);
    }
}

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

#[cfg(test)]
#[path = "../test/config/globals.rs"]
mod tests;
