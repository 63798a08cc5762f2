use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::{debug, trace};

impl<T> QuadTree<T> {
    /// Owner of a stored item, or the reason it has none.
    pub(crate) fn tracked_owner(&self, key: ItemKey) -> QuadtreeResult<NodeKey> {
        self.items
            .get(key)
            .ok_or(QuadtreeError::UnknownItem)?
            .owner
            .ok_or(QuadtreeError::NotTracked)
    }

    /// Re-places a tracked item after its bound changed.
    ///
    /// Re-insertion starts at the nearest ancestor of the current owner whose
    /// bounds hold the new bound (the root if none does) and routes down from
    /// there. The old owner is only checked for collapse once the item has a
    /// new home, so it is still alive while we walk.
    pub(crate) fn reroute(&mut self, key: ItemKey) {
        let Some(owner) = self.items[key].owner else {
            return;
        };
        let bound = self.items[key].bound;
        self.unlink(key, owner);

        let mut start = owner;
        while !self.nodes[start].bounds.contains(&bound) {
            match self.nodes[start].parent {
                Some(parent) => start = parent,
                None => break,
            }
        }

        self.link(start, key);
        self.collapse_from(owner);
    }

    /// Pushes down every item that sits on an internal node but fits one of
    /// its children. Sinking can split a full leaf and strand the items
    /// already there, so this repeats until a pass moves nothing. Items only
    /// move deeper, which bounds the number of passes by `max_depth`.
    pub(crate) fn settle(&mut self) {
        loop {
            let mut stranded = Vec::new();
            for (key, node) in &self.nodes {
                if node.is_leaf() {
                    continue;
                }
                stranded.extend(
                    node.items
                        .iter()
                        .copied()
                        .filter(|item| self.route(key, &self.items[*item].bound).is_some()),
                );
            }
            if stranded.is_empty() {
                return;
            }
            trace!(items = stranded.len(), "settling stranded items");
            for key in stranded {
                self.reroute(key);
            }
        }
    }

    /// Folds empty subtrees back into leaves, starting at `start` and moving
    /// towards the root until a node still holds something.
    pub(crate) fn collapse_from(&mut self, start: NodeKey) {
        let mut current = Some(start);
        while let Some(key) = current {
            let node = &self.nodes[key];
            if !node.items.is_empty() {
                return;
            }
            if let Some(children) = node.children {
                if !children
                    .iter()
                    .all(|child| self.nodes[*child].is_empty_leaf())
                {
                    return;
                }
                for child in children {
                    self.nodes.remove(child);
                }
                self.nodes[key].children = None;
                debug!(node = ?key, depth = self.nodes[key].depth, "collapsed empty node");
            }
            current = self.nodes[key].parent;
        }
    }

    /// Unlinks every item at or below `start` and destroys all of its
    /// descendants, leaving `start` an empty leaf.
    pub(crate) fn clear_subtree(&mut self, start: NodeKey) {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(key) = stack.pop() {
            let node = &mut self.nodes[key];
            for item in node.items.drain(..) {
                self.items[item].owner = None;
            }
            if let Some(children) = node.children.take() {
                stack.extend(children);
            }
            if key != start {
                self.nodes.remove(key);
            }
        }
    }
}
