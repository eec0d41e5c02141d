//! Depth-first traversal of the menu tree.
//!
//! Visitors receive the ancestor chain (root first, immediate parent last) as a
//! borrowed view of the live stack. The tree is shared-borrowed for the whole
//! walk, so it cannot be restructured from inside a visitor.

use super::item::{Item, MenuItem};
use std::ops::ControlFlow;

/// Visits every item pre-order: a sub-menu is visited before its children.
pub fn each_item<'a, F>(items: &'a [Item], mut visit: F)
where
    F: FnMut(&[&'a MenuItem], &'a Item),
{
    let mut ancestors = Vec::new();
    let _ = walk(items, &mut ancestors, &mut |parents: &[&'a MenuItem], item: &'a Item| {
        visit(parents, item);
        ControlFlow::<()>::Continue(())
    });
}

/// Returns the first item, in traversal order, accepted by `predicate`.
pub fn find_item<'a, P>(items: &'a [Item], mut predicate: P) -> Option<&'a Item>
where
    P: FnMut(&[&'a MenuItem], &'a Item) -> bool,
{
    let mut ancestors = Vec::new();
    let found = walk(items, &mut ancestors, &mut |parents: &[&'a MenuItem], item: &'a Item| {
        if predicate(parents, item) {
            ControlFlow::Break(item)
        } else {
            ControlFlow::Continue(())
        }
    });

    match found {
        ControlFlow::Break(item) => Some(item),
        ControlFlow::Continue(()) => None,
    }
}

fn walk<'a, B, F>(items: &'a [Item], ancestors: &mut Vec<&'a MenuItem>, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&[&'a MenuItem], &'a Item) -> ControlFlow<B>,
{
    for item in items {
        visit(ancestors.as_slice(), item)?;
        if let Item::Menu(menu) = item {
            ancestors.push(menu);
            let result = walk(&menu.items, ancestors, visit);
            ancestors.pop();
            result?;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
#[path = "../test/menu/traverse.rs"]
mod tests;
