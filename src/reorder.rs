//! Reordering and editing of the menu tree
//!
//! Nodes are addressed by index paths: `[2, 0]` is the first child of the
//! third top-level node. Moves carry the whole subtree of the target and
//! return its new path, or `None` when the node cannot move that way.
//!
//! Moving up from the top of a sub-menu leaves the sub-menu; moving up onto a
//! sub-menu enters it at the bottom. Moving down is the mirror image.

use crate::menu::Item;
use std::error::Error;
use std::fmt;

/// A node in an ordered forest: either a leaf or a container of children.
pub trait ForestNode: Sized {
    /// Children of a container, `None` for a leaf.
    fn children(&self) -> Option<&Vec<Self>>;
    fn children_mut(&mut self) -> Option<&mut Vec<Self>>;
}

impl ForestNode for Item {
    fn children(&self) -> Option<&Vec<Self>> {
        self.as_menu().map(|menu| &menu.items)
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        self.as_menu_mut().map(|menu| &mut menu.items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    NotFound,
    /// Sub-menus must be emptied before they can be removed.
    MenuNotEmpty,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveError::NotFound => write!(f, "No item at that position"),
            RemoveError::MenuNotEmpty => write!(f, "Cannot remove a sub-menu that still has items"),
        }
    }
}

impl Error for RemoveError {}

pub fn node_at<'a, N: ForestNode>(forest: &'a [N], path: &[usize]) -> Option<&'a N> {
    let (&last, parents) = path.split_last()?;
    let mut current = forest;
    for &index in parents {
        current = current.get(index)?.children()?;
    }
    current.get(last)
}

fn siblings_mut<'a, N: ForestNode>(forest: &'a mut Vec<N>, parent_path: &[usize]) -> Option<&'a mut Vec<N>> {
    let mut current = forest;
    for &index in parent_path {
        current = current.get_mut(index)?.children_mut()?;
    }
    Some(current)
}

fn path_with(base: &[usize], tail: &[usize]) -> Vec<usize> {
    let mut path = base.to_vec();
    path.extend_from_slice(tail);
    path
}

pub fn can_move_up<N: ForestNode>(forest: &[N], path: &[usize]) -> bool {
    node_at(forest, path).is_some() && path != [0]
}

pub fn can_move_down<N: ForestNode>(forest: &[N], path: &[usize]) -> bool {
    node_at(forest, path).is_some() && !(path.len() == 1 && path[0] + 1 == forest.len())
}

pub fn move_up_in_place<N: ForestNode>(forest: &mut Vec<N>, path: &[usize]) -> Option<Vec<usize>> {
    node_at(forest, path)?;
    let (&index, parent_path) = path.split_last()?;

    if index == 0 {
        // First child: step out in front of the containing sub-menu.
        let (&parent_index, grand_path) = parent_path.split_last()?;
        let parent_siblings = siblings_mut(forest, grand_path)?;
        let target = parent_siblings.get_mut(parent_index)?.children_mut()?.remove(0);
        parent_siblings.insert(parent_index, target);
        return Some(path_with(grand_path, &[parent_index]));
    }

    let siblings = siblings_mut(forest, parent_path)?;
    let target = siblings.remove(index);
    if let Some(children) = siblings[index - 1].children_mut() {
        children.push(target);
        return Some(path_with(parent_path, &[index - 1, children.len() - 1]));
    }
    siblings.insert(index - 1, target);
    Some(path_with(parent_path, &[index - 1]))
}

pub fn move_down_in_place<N: ForestNode>(forest: &mut Vec<N>, path: &[usize]) -> Option<Vec<usize>> {
    node_at(forest, path)?;
    let (&index, parent_path) = path.split_last()?;
    let siblings = siblings_mut(forest, parent_path)?;

    if index + 1 < siblings.len() {
        let target = siblings.remove(index);
        // the following sibling now sits at `index`
        if let Some(children) = siblings[index].children_mut() {
            children.insert(0, target);
            return Some(path_with(parent_path, &[index, 0]));
        }
        siblings.insert(index + 1, target);
        return Some(path_with(parent_path, &[index + 1]));
    }

    // Last child: step out behind the containing sub-menu.
    let (&parent_index, grand_path) = parent_path.split_last()?;
    let target = siblings.pop()?;
    let parent_siblings = siblings_mut(forest, grand_path)?;
    parent_siblings.insert(parent_index + 1, target);
    Some(path_with(grand_path, &[parent_index + 1]))
}

/// Returns a copy of `forest` with the node at `path` moved up.
pub fn move_up<N: ForestNode + Clone>(forest: &[N], path: &[usize]) -> Vec<N> {
    let mut moved = forest.to_vec();
    move_up_in_place(&mut moved, path);
    moved
}

/// Returns a copy of `forest` with the node at `path` moved down.
pub fn move_down<N: ForestNode + Clone>(forest: &[N], path: &[usize]) -> Vec<N> {
    let mut moved = forest.to_vec();
    move_down_in_place(&mut moved, path);
    moved
}

/// Places a new node relative to the selection and returns its path.
///
/// Without a selection the node goes to the end of the top level. A selected
/// container receives it as its last child; any other selection gets it as the
/// next sibling.
pub fn insert_after<N: ForestNode>(forest: &mut Vec<N>, selected: Option<&[usize]>, node: N) -> Vec<usize> {
    if let Some(path) = selected
        && node_at(forest, path).is_some()
        && let Some((&index, parent_path)) = path.split_last()
        && let Some(siblings) = siblings_mut(forest, parent_path)
    {
        return match siblings[index].children_mut() {
            Some(children) => {
                children.push(node);
                path_with(path, &[children.len() - 1])
            }
            None => {
                siblings.insert(index + 1, node);
                path_with(parent_path, &[index + 1])
            }
        };
    }

    forest.push(node);
    vec![forest.len() - 1]
}

pub fn remove<N: ForestNode>(forest: &mut Vec<N>, path: &[usize]) -> Result<N, RemoveError> {
    let target = node_at(forest, path).ok_or(RemoveError::NotFound)?;
    if target.children().is_some_and(|children| !children.is_empty()) {
        return Err(RemoveError::MenuNotEmpty);
    }
    let (&index, parent_path) = path.split_last().ok_or(RemoveError::NotFound)?;
    let siblings = siblings_mut(forest, parent_path).ok_or(RemoveError::NotFound)?;
    Ok(siblings.remove(index))
}

#[cfg(test)]
#[path = "test/reorder.rs"]
mod tests;
