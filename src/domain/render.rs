use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::Genealogy;
use crate::domain::entities::VampireId;

/// Conversion of a subtree into a printable [`termtree::Tree`].
pub trait TreeRender {
    fn to_tree_string(&self, id: VampireId) -> Tree<String>;
}

impl TreeRender for Genealogy {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, id: VampireId) -> Tree<String> {
        fn build_tree(genealogy: &Genealogy, id: VampireId, parent_tree: &mut Tree<String>) {
            for &child in genealogy.offspring(id) {
                if let Some(vampire) = genealogy.get(child) {
                    let mut child_tree = Tree::new(vampire.to_string());
                    build_tree(genealogy, child, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        match self.get(id) {
            Some(vampire) => {
                let mut tree = Tree::new(vampire.to_string());
                build_tree(self, id, &mut tree);
                tree
            }
            None => Tree::new("Unknown vampire".to_string()),
        }
    }
}
