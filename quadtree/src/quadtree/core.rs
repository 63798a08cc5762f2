use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::{debug, trace};

impl<T> QuadTree<T> {
    /// Creates an empty tree covering `region`.
    pub fn new(region: Rect, config: Config) -> QuadtreeResult<Self> {
        if !region.is_well_formed() {
            return Err(QuadtreeError::InvalidRegion {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }
        if config.capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity);
        }

        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(region, 0, None));
        Ok(Self {
            nodes,
            items: SlotMap::with_key(),
            root,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Region covered by the root node.
    pub fn bounds(&self) -> Rect {
        self.nodes[self.root].bounds
    }

    /// Child of `node` that fully holds `bound`, if `node` is internal and
    /// `bound` lies strictly inside one quadrant.
    #[inline(always)]
    pub(crate) fn route(&self, node: NodeKey, bound: &Rect) -> Option<NodeKey> {
        let node = &self.nodes[node];
        let children = node.children?;
        let quadrant = Quadrant::locate(&node.bounds, bound)?;
        let child = children[quadrant.index()];
        // Also guards bounds that lie outside the root region.
        self.nodes[child].bounds.contains(bound).then_some(child)
    }

    /// Deepest node reachable from `start` by routing `bound`.
    pub(crate) fn descend(&self, start: NodeKey, bound: &Rect) -> NodeKey {
        let mut node = start;
        while let Some(child) = self.route(node, bound) {
            node = child;
        }
        node
    }

    /// Places an untracked item at or below `start`, subdividing the receiving
    /// leaf when it reaches capacity.
    pub(crate) fn link(&mut self, start: NodeKey, key: ItemKey) {
        debug_assert!(self.items[key].owner.is_none());
        let bound = self.items[key].bound;
        let node = self.descend(start, &bound);

        self.nodes[node].items.push(key);
        self.items[key].owner = Some(node);
        trace!(?key, ?node, depth = self.nodes[node].depth, "linked item");

        if self.should_subdivide(node) {
            self.subdivide(node);
            // Only the item that triggered the split moves; earlier items stay
            // until they are updated.
            self.reroute(key);
        }
    }

    /// Drops `key` from `owner`'s item list and clears its back-reference.
    /// Does not collapse anything.
    pub(crate) fn unlink(&mut self, key: ItemKey, owner: NodeKey) {
        let items = &mut self.nodes[owner].items;
        let position = items.iter().position(|item| *item == key);
        debug_assert!(position.is_some(), "owner does not list its item");
        if let Some(position) = position {
            items.remove(position);
        }
        self.items[key].owner = None;
        trace!(?key, node = ?owner, "unlinked item");
    }

    fn should_subdivide(&self, node: NodeKey) -> bool {
        let node = &self.nodes[node];
        node.is_leaf()
            && node.depth < self.config.max_depth
            && node.items.len() >= self.config.capacity
    }

    fn subdivide(&mut self, node: NodeKey) {
        debug_assert!(self.nodes[node].is_leaf(), "subdividing an internal node");
        let depth = self.nodes[node].depth + 1;
        let quadrants = self.nodes[node].bounds.quadrants();
        let children = quadrants.map(|bounds| {
            self.nodes.insert(Node::new(bounds, depth, Some(node)))
        });
        self.nodes[node].children = Some(children);
        debug!(?node, depth = depth - 1, "subdivided node");
    }

    /// Visits `start` and every node below it.
    pub(crate) fn walk<F>(&self, start: NodeKey, mut f: F)
    where
        F: FnMut(&Node),
    {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            f(node);
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
    }
}
