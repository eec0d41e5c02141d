//! Menu item tree model.
//!
//! The tree is an ordered list of [`Item`]s. Each item is a separator, a host
//! entry or a sub-menu holding its own ordered children. Items convert to and
//! from the generic string-keyed records stored in the config file.

mod errors;
mod item;
mod record;
mod traverse;

pub use errors::{UnknownItemType, ValidationError};
pub use item::{HostItem, Item, ItemKind, MenuItem};
pub use record::{Record, item_from_record, item_to_record, tree_from_records, tree_from_records_with_warnings, tree_to_records};
pub use traverse::{each_item, find_item};
