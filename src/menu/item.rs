//! Menu item domain models.

use super::errors::ValidationError;
use crate::shell::split_env;
use serde_yml::{Mapping, Value};

/// Record key of the opaque terminal profile extension field.
pub(super) const PROFILE_KEY: &str = "profile";

/// Discriminant of an [`Item`], matching the record `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Separator,
    Host,
    Menu,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Separator => "separator",
            ItemKind::Host => "host",
            ItemKind::Menu => "menu",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "separator" => Some(ItemKind::Separator),
            "host" => Some(ItemKind::Host),
            "menu" => Some(ItemKind::Menu),
            _ => None,
        }
    }
}

/// A node in the menu tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Separator,
    Host(HostItem),
    Menu(MenuItem),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Separator => ItemKind::Separator,
            Item::Host(_) => ItemKind::Host,
            Item::Menu(_) => ItemKind::Menu,
        }
    }

    /// Title of a host or sub-menu. Separators have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            Item::Separator => None,
            Item::Host(host) => Some(&host.title),
            Item::Menu(menu) => Some(&menu.title),
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Item::Separator)
    }

    pub fn is_host(&self) -> bool {
        matches!(self, Item::Host(_))
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Item::Menu(_))
    }

    pub fn as_host(&self) -> Option<&HostItem> {
        match self {
            Item::Host(host) => Some(host),
            _ => None,
        }
    }

    pub fn as_host_mut(&mut self) -> Option<&mut HostItem> {
        match self {
            Item::Host(host) => Some(host),
            _ => None,
        }
    }

    pub fn as_menu(&self) -> Option<&MenuItem> {
        match self {
            Item::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn as_menu_mut(&mut self) -> Option<&mut MenuItem> {
        match self {
            Item::Menu(menu) => Some(menu),
            _ => None,
        }
    }
}

impl From<HostItem> for Item {
    fn from(host: HostItem) -> Self {
        Item::Host(host)
    }
}

impl From<MenuItem> for Item {
    fn from(menu: MenuItem) -> Self {
        Item::Menu(menu)
    }
}

/// A menu entry that opens a terminal session to one host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostItem {
    /// Menu label.
    pub title: String,
    /// Raw connection string, optionally led by `NAME="value"` assignments.
    pub sshparams: String,
    /// Terminal geometry (passed verbatim to the terminal).
    pub geometry: Option<String>,
    /// Connect through the `bcvi` wrapper instead of calling `ssh` directly.
    pub enable_alt_transport: bool,
    /// Record fields this model does not interpret, kept for the next save.
    pub(super) extra: Mapping,
}

impl HostItem {
    pub fn new(title: impl Into<String>, sshparams: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sshparams: sshparams.into(),
            ..Self::default()
        }
    }

    /// Transient host built from free text typed by the user: the text is both
    /// the title and the connection string.
    pub fn from_text(text: &str) -> Self {
        Self::new(text, text)
    }

    /// Leading environment assignments of `sshparams` (may be empty).
    pub fn env_settings(&self) -> &str {
        split_env(&self.sshparams).env
    }

    /// `sshparams` without the leading environment assignments.
    pub fn sshparams_noenv(&self) -> &str {
        split_env(&self.sshparams).rest
    }

    /// Geometry, or an empty string when unset.
    pub fn geometry(&self) -> &str {
        self.geometry.as_deref().unwrap_or("")
    }

    /// Terminal profile name stored in the `profile` extension field.
    pub fn profile(&self) -> Option<&str> {
        self.extra.get(PROFILE_KEY).and_then(Value::as_str)
    }

    pub fn set_profile(&mut self, profile: Option<&str>) {
        let value = match profile {
            Some(name) => Value::String(name.to_string()),
            None => Value::Null,
        };
        self.extra.insert(Value::String(PROFILE_KEY.to_string()), value);
    }

    /// Extension fields carried opaquely from the source record.
    pub fn extra(&self) -> &Mapping {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut Mapping {
        &mut self.extra
    }

    /// Deep copy normalized through the record form, as the "copy entry" action does.
    pub fn duplicate(&self) -> Self {
        let record = super::record::host_to_record(self);
        super::record::host_from_record(&record)
    }

    /// Checks the fields the editing surface requires before saving.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.sshparams.trim().is_empty() {
            return Err(ValidationError::MissingHostname);
        }
        Ok(())
    }
}

/// A sub-menu with an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItem {
    pub title: String,
    pub items: Vec<Item>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn append_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Direct host children in order. Nested sub-menus and separators are skipped.
    pub fn hosts(&self) -> impl Iterator<Item = &HostItem> {
        self.items.iter().filter_map(Item::as_host)
    }
}

#[cfg(test)]
#[path = "../test/menu/item.rs"]
mod tests;
