//! Editor context: which node tree an operation works on

use crate::nodes::NodeGraph;

/// The node editor space an action runs in.
///
/// `node_tree` is the material's tree; `edit_tree` is set while a group
/// is open for editing and takes precedence over the outer tree.
#[derive(Debug, Clone, Default)]
pub struct EditorSpace {
    pub node_tree: Option<NodeGraph>,
    pub edit_tree: Option<NodeGraph>,
}

impl EditorSpace {
    /// Space showing `tree` with no group open
    pub fn new(tree: NodeGraph) -> Self {
        Self {
            node_tree: Some(tree),
            edit_tree: None,
        }
    }

    /// The tree being edited: the open group if any, else the outer tree
    pub fn active_tree(&self) -> Option<&NodeGraph> {
        self.edit_tree.as_ref().or(self.node_tree.as_ref())
    }

    pub fn active_tree_mut(&mut self) -> Option<&mut NodeGraph> {
        match self.edit_tree {
            Some(ref mut tree) => Some(tree),
            None => self.node_tree.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::shader::builtin_registry;

    #[test]
    fn test_edit_tree_takes_precedence() {
        let mut outer = NodeGraph::new();
        outer.new_node(builtin_registry(), "ShaderNodeMath").unwrap();
        let mut space = EditorSpace::new(outer);
        assert_eq!(space.active_tree().unwrap().len(), 1);

        space.edit_tree = Some(NodeGraph::new());
        assert!(space.active_tree().unwrap().is_empty());
        space
            .active_tree_mut()
            .unwrap()
            .new_node(builtin_registry(), "ShaderNodeValue")
            .unwrap();
        assert_eq!(space.edit_tree.as_ref().unwrap().len(), 1);
        assert_eq!(space.node_tree.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_space_has_no_tree() {
        assert!(EditorSpace::default().active_tree().is_none());
    }
}
