//! Folder Tree Utilities
//!
//! Builds the folder hierarchy from the flat parent-pointer list and flattens
//! it into display rows.

use crate::models::Folder;
use std::collections::{HashMap, HashSet};

/// A folder with its sorted children
#[derive(Debug, Clone, PartialEq)]
pub struct FolderTreeNode {
    pub folder: Folder,
    pub children: Vec<FolderTreeNode>,
    /// Transient; filled from the view's expanded-set
    pub expanded: bool,
}

impl FolderTreeNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

fn name_order(a: &Folder, b: &Folder) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then(a.id.cmp(&b.id))
}

/// Build the folder forest.
///
/// Roots are folders with no parent, or whose parent id does not resolve.
/// Children are sorted case-insensitively by name at every level. Folders
/// caught in a parent cycle never hang off a root and are left out.
pub fn build_folder_tree(folders: &[Folder]) -> Vec<FolderTreeNode> {
    let known: HashSet<i64> = folders.iter().map(|f| f.id).collect();

    // Build parent -> children map; dangling parents collapse to root
    let mut children_map: HashMap<Option<i64>, Vec<&Folder>> = HashMap::new();
    for folder in folders {
        let parent = folder.parent_id.filter(|p| known.contains(p));
        children_map.entry(parent).or_default().push(folder);
    }
    for children in children_map.values_mut() {
        children.sort_by(|a, b| name_order(a, b));
    }

    fn collect(
        parent_id: Option<i64>,
        children_map: &HashMap<Option<i64>, Vec<&Folder>>,
        visited: &mut HashSet<i64>,
    ) -> Vec<FolderTreeNode> {
        let Some(children) = children_map.get(&parent_id) else {
            return Vec::new();
        };
        let mut nodes = Vec::with_capacity(children.len());
        for folder in children {
            // Duplicate ids in the input must not recurse twice
            if !visited.insert(folder.id) {
                continue;
            }
            nodes.push(FolderTreeNode {
                folder: (*folder).clone(),
                children: collect(Some(folder.id), children_map, visited),
                expanded: false,
            });
        }
        nodes
    }

    let mut visited = HashSet::new();
    collect(None, &children_map, &mut visited)
}

/// Breadcrumb for a folder: root ancestor first, the folder itself last.
///
/// Stops at a missing parent and at a repeated id, so a corrupted cycle
/// still terminates. Unknown id gives an empty path.
pub fn folder_path(folders: &[Folder], folder_id: i64) -> Vec<Folder> {
    let by_id: HashMap<i64, &Folder> = folders.iter().map(|f| (f.id, f)).collect();
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(folder_id);

    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        let Some(folder) = by_id.get(&id) else {
            break;
        };
        path.push((*folder).clone());
        current = folder.parent_id;
    }

    path.reverse();
    path
}

/// Folder ids currently expanded in a tree view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedSet(HashSet<i64>);

impl ExpandedSet {
    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership. Leaf folders have nothing to show, so toggling them
    /// is a no-op. Returns whether the set changed.
    pub fn toggle(&mut self, id: i64, has_children: bool) -> bool {
        if !has_children {
            return false;
        }
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
        true
    }

    pub fn expand(&mut self, id: i64) {
        self.0.insert(id);
    }
}

/// Copy expansion state into the nodes
pub fn mark_expanded(nodes: &mut [FolderTreeNode], expanded: &ExpandedSet) {
    for node in nodes {
        node.expanded = expanded.contains(node.folder.id);
        mark_expanded(&mut node.children, expanded);
    }
}

/// One visible row of the tree view
#[derive(Debug, Clone, PartialEq)]
pub struct FolderRow {
    pub folder: Folder,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
}

/// Render nodes as indented rows using recursive DFS.
/// Children of collapsed nodes are skipped.
pub fn flatten_tree(nodes: &[FolderTreeNode]) -> Vec<FolderRow> {
    fn collect(nodes: &[FolderTreeNode], depth: usize, result: &mut Vec<FolderRow>) {
        for node in nodes {
            result.push(FolderRow {
                folder: node.folder.clone(),
                depth,
                has_children: node.has_children(),
                expanded: node.expanded,
            });
            if node.expanded {
                collect(&node.children, depth + 1, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(nodes, 0, &mut result);
    result
}
