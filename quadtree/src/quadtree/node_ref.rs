use super::*;
use std::fmt;

/// Read-only view of one node, for diagnostics and introspection.
pub struct NodeRef<'a, T> {
    tree: &'a QuadTree<T>,
    key: NodeKey,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("key", &self.key)
            .field("bounds", &node.bounds)
            .field("depth", &node.depth)
            .field("items", &node.items.len())
            .field("is_leaf", &node.is_leaf())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn new(tree: &'a QuadTree<T>, key: NodeKey) -> Self {
        Self { tree, key }
    }

    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.key]
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    pub fn bounds(&self) -> Rect {
        self.node().bounds
    }

    pub fn depth(&self) -> usize {
        self.node().depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent.map(|key| NodeRef::new(self.tree, key))
    }

    /// The four children in quadrant order, or `None` for a leaf.
    pub fn children(&self) -> Option<[NodeRef<'a, T>; 4]> {
        let tree = self.tree;
        self.node()
            .children
            .map(|children| children.map(|key| NodeRef::new(tree, key)))
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeRef<'a, T>> {
        self.children().map(|children| children[quadrant.index()])
    }

    /// Items held directly by this node.
    pub fn items(&self) -> impl Iterator<Item = ItemKey> + 'a {
        self.node().items.iter().copied()
    }

    pub fn item_count(&self) -> usize {
        self.node().items.len()
    }

    /// Number of descendant nodes.
    pub fn total_children(&self) -> usize {
        let mut total = 0;
        self.tree.walk(self.key, |node| {
            if !node.is_leaf() {
                total += 4;
            }
        });
        total
    }

    /// Number of items held by this node and its descendants.
    pub fn total_objects(&self) -> usize {
        let mut total = 0;
        self.tree.walk(self.key, |node| total += node.items.len());
        total
    }

    /// Query restricted to this node's subtree.
    pub fn query(&self, bound: &Rect) -> Vec<ItemKey> {
        let mut out = Vec::new();
        self.tree.query_from(self.key, bound, None, |key| out.push(key));
        out
    }
}

impl<T> QuadTree<T> {
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root)
    }

    /// View of a live node; `None` once the node has been collapsed or cleared.
    pub fn node(&self, key: NodeKey) -> Option<NodeRef<'_, T>> {
        self.nodes
            .contains_key(key)
            .then(|| NodeRef::new(self, key))
    }

    /// Node currently holding the item.
    pub fn owner_of(&self, key: ItemKey) -> Option<NodeRef<'_, T>> {
        let owner = self.items.get(key)?.owner?;
        Some(NodeRef::new(self, owner))
    }

    /// Deepest node whose region would directly hold `bound`.
    pub fn leaf(&self, bound: &Rect) -> NodeRef<'_, T> {
        NodeRef::new(self, self.descend(self.root, bound))
    }

    pub fn total_children(&self) -> usize {
        self.root().total_children()
    }

    pub fn total_objects(&self) -> usize {
        self.root().total_objects()
    }
}
