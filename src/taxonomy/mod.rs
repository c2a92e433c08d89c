//! Category taxonomy
//!
//! An immutable, ordered tree of categories. Children keep the order of the
//! source data so menus list categories the way the taxonomy file does.
//!
//! # Module Structure
//!
//! - `path` - NavigationPath (labels from the root to a level)
//! - `legacy` - nested-object JSON encoding (`{"Dogs": {"id": "1"}}`)
//! - `google` - Google `taxonomy-with-ids` text format
//! - `loader` - format detection and file loading

mod google;
mod legacy;
mod loader;
mod path;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use google::parse_google_taxonomy;
pub use legacy::{
    from_json_str, from_json_value, from_script_str, to_json_string, to_json_value,
    RESERVED_ID_KEY,
};
pub use loader::{load_taxonomy, TaxonomyFormat};
pub use path::{NavigationPath, DEFAULT_SEPARATOR};

/// Identifier of a category (Google product category ids are numeric, but
/// ids are carried as opaque strings)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A node of the taxonomy tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryNode {
    /// Selectable category without children
    Leaf { id: CategoryId },
    /// Category with sub-categories. Google branches carry their own id.
    Branch {
        id: Option<CategoryId>,
        children: Vec<Category>,
    },
}

impl CategoryNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, CategoryNode::Leaf { .. })
    }

    pub fn id(&self) -> Option<&CategoryId> {
        match self {
            CategoryNode::Leaf { id } => Some(id),
            CategoryNode::Branch { id, .. } => id.as_ref(),
        }
    }

    /// Children of a branch; empty for leaves
    pub fn children(&self) -> &[Category] {
        match self {
            CategoryNode::Leaf { .. } => &[],
            CategoryNode::Branch { children, .. } => children,
        }
    }
}

/// A labelled node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub node: CategoryNode,
}

impl Category {
    pub fn leaf(label: impl Into<String>, id: impl Into<CategoryId>) -> Self {
        Self {
            label: label.into(),
            node: CategoryNode::Leaf { id: id.into() },
        }
    }

    pub fn branch(label: impl Into<String>, id: Option<CategoryId>, children: Vec<Category>) -> Self {
        Self {
            label: label.into(),
            node: CategoryNode::Branch { id, children },
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Direct child with this label
    pub fn child(&self, label: &str) -> Option<&Category> {
        find_label(self.node.children(), label)
    }

    fn count(&self) -> usize {
        1 + self.node.children().iter().map(Category::count).sum::<usize>()
    }
}

/// Deepest level reachable by following a navigation path
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLevel<'t> {
    /// Categories listed at that level
    pub categories: &'t [Category],
    /// Number of path labels that were followed
    pub depth: usize,
}

/// The category tree handed to the picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    roots: Vec<Category>,
}

impl Taxonomy {
    pub fn new(roots: Vec<Category>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of categories (branches and leaves)
    pub fn category_count(&self) -> usize {
        self.roots.iter().map(Category::count).sum()
    }

    /// Walk the path from the root, one label at a time.
    ///
    /// The walk stops at the first label that is missing; the level reached
    /// so far is returned. A leaf label is followed into an empty level.
    pub fn resolve(&self, path: &NavigationPath) -> ResolvedLevel<'_> {
        let mut categories = self.roots.as_slice();
        let mut depth = 0;

        for label in path.labels() {
            match find_label(categories, label) {
                Some(category) => {
                    categories = category.node.children();
                    depth += 1;
                }
                None => break,
            }
        }

        ResolvedLevel { categories, depth }
    }

    /// Category at exactly this path, if every label resolves
    pub fn get(&self, path: &NavigationPath) -> Option<&Category> {
        let (last, parents) = path.labels().split_last()?;
        let mut categories = self.roots.as_slice();
        for label in parents {
            categories = find_label(categories, label)?.node.children();
        }
        find_label(categories, last)
    }

    /// Path to the first category (depth-first) carrying this id
    pub fn find_by_id(&self, id: &CategoryId) -> Option<NavigationPath> {
        fn walk(categories: &[Category], id: &CategoryId, trail: &mut NavigationPath) -> bool {
            for category in categories {
                trail.push(category.label.clone());
                if category.node.id() == Some(id) || walk(category.node.children(), id, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let mut trail = NavigationPath::new();
        walk(&self.roots, id, &mut trail).then_some(trail)
    }

    /// Every leaf with its full path, in depth-first order
    pub fn leaves(&self) -> Vec<(NavigationPath, &CategoryId)> {
        fn walk<'t>(
            categories: &'t [Category],
            trail: &mut NavigationPath,
            out: &mut Vec<(NavigationPath, &'t CategoryId)>,
        ) {
            for category in categories {
                trail.push(category.label.clone());
                match &category.node {
                    CategoryNode::Leaf { id } => out.push((trail.clone(), id)),
                    CategoryNode::Branch { children, .. } => walk(children, trail, out),
                }
                trail.pop();
            }
        }

        let mut out = Vec::new();
        walk(&self.roots, &mut NavigationPath::new(), &mut out);
        out
    }

    /// Insert a chain of labels, creating missing categories with `id`.
    ///
    /// A leaf that receives a child becomes a branch and keeps its own id.
    pub(crate) fn insert(&mut self, labels: &[&str], id: &CategoryId) {
        let Some((last, parents)) = labels.split_last() else {
            return;
        };

        let mut level = &mut self.roots;
        for label in parents {
            let index = position_or_push(level, label, id);
            level = level[index].node.make_branch();
        }
        position_or_push(level, last, id);
    }
}

impl CategoryNode {
    fn make_branch(&mut self) -> &mut Vec<Category> {
        if let CategoryNode::Leaf { id } = self {
            let id = id.clone();
            *self = CategoryNode::Branch {
                id: Some(id),
                children: Vec::new(),
            };
        }
        match self {
            CategoryNode::Branch { children, .. } => children,
            CategoryNode::Leaf { .. } => unreachable!("leaf replaced above"),
        }
    }
}

fn find_label<'t>(categories: &'t [Category], label: &str) -> Option<&'t Category> {
    categories.iter().find(|c| c.label == label)
}

fn position_or_push(level: &mut Vec<Category>, label: &str, id: &CategoryId) -> usize {
    match level.iter().position(|c| c.label == label) {
        Some(index) => index,
        None => {
            level.push(Category::leaf(label, id.clone()));
            level.len() - 1
        }
    }
}
