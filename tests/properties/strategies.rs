//! Generators for random taxonomies.

use proptest::collection::btree_map;
use proptest::prelude::*;

use catpick::taxonomy::{Category, CategoryId, CategoryNode, NavigationPath, Taxonomy};

/// Labels never contain `>` and never equal the reserved `id` key
pub fn label() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}( [a-z&]{1,5})?"
}

fn id() -> impl Strategy<Value = CategoryId> {
    "[1-9][0-9]{0,5}".prop_map(CategoryId::new)
}

fn labelled(children: std::collections::BTreeMap<String, CategoryNode>) -> Vec<Category> {
    children
        .into_iter()
        .map(|(label, node)| Category { label, node })
        .collect()
}

/// Trees where branches always have children; `branch_id` decides whether
/// branches carry their own id.
fn tree(branch_id: BoxedStrategy<Option<CategoryId>>) -> impl Strategy<Value = Taxonomy> {
    let leaf = id().prop_map(|id| CategoryNode::Leaf { id });
    let node = leaf.prop_recursive(4, 48, 4, move |inner| {
        (branch_id.clone(), btree_map(label(), inner, 1..4)).prop_map(|(id, children)| {
            CategoryNode::Branch {
                id,
                children: labelled(children),
            }
        })
    });
    btree_map(label(), node, 1..5).prop_map(|roots| Taxonomy::new(labelled(roots)))
}

/// Legacy-JSON shaped trees (branch ids optional)
pub fn taxonomy() -> impl Strategy<Value = Taxonomy> {
    tree(proptest::option::of(id()).boxed())
}

/// Google shaped trees (every category has an id)
pub fn taxonomy_with_branch_ids() -> impl Strategy<Value = Taxonomy> {
    tree(id().prop_map(Some).boxed())
}

/// Every category of the tree with its full path, parents first
pub fn preorder(taxonomy: &Taxonomy) -> Vec<(NavigationPath, &Category)> {
    fn walk<'t>(
        categories: &'t [Category],
        trail: &NavigationPath,
        out: &mut Vec<(NavigationPath, &'t Category)>,
    ) {
        for category in categories {
            let path = trail.with_label(category.label.clone());
            out.push((path.clone(), category));
            walk(category.node.children(), &path, out);
        }
    }

    let mut out = Vec::new();
    walk(taxonomy.roots(), &NavigationPath::new(), &mut out);
    out
}

/// A taxonomy together with one of its leaves
pub fn taxonomy_and_leaf() -> impl Strategy<Value = (Taxonomy, NavigationPath)> {
    taxonomy().prop_flat_map(|taxonomy| {
        let leaves: Vec<NavigationPath> =
            taxonomy.leaves().into_iter().map(|(path, _)| path).collect();
        (Just(taxonomy), proptest::sample::select(leaves))
    })
}
