use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};

impl<T> QuadTree<T> {
    /// Every tracked item whose bound intersects `bound`. Order is unspecified.
    pub fn query(&self, bound: &Rect) -> Vec<ItemKey> {
        let mut out = Vec::new();
        self.query_into(bound, &mut out);
        out
    }

    /// Appends matches to `out` instead of allocating.
    pub fn query_into(&self, bound: &Rect, out: &mut Vec<ItemKey>) {
        self.query_from(self.root, bound, None, |key| out.push(key));
    }

    pub fn query_with<F>(&self, bound: &Rect, f: F)
    where
        F: FnMut(ItemKey),
    {
        self.query_from(self.root, bound, None, f);
    }

    /// Like [`QuadTree::query`] but never reports `exclude`. Other items with
    /// an identical bound are still reported.
    pub fn query_excluding(&self, bound: &Rect, exclude: ItemKey) -> Vec<ItemKey> {
        let mut out = Vec::new();
        self.query_from(self.root, bound, Some(exclude), |key| out.push(key));
        out
    }

    /// Tracked items overlapping the item's own bound, excluding the item.
    pub fn query_item(&self, key: ItemKey) -> QuadtreeResult<Vec<ItemKey>> {
        let item = self.items.get(key).ok_or(QuadtreeError::UnknownItem)?;
        Ok(self.query_excluding(&item.bound, key))
    }

    /// Every tracked item held by a node that a query for `bound` would scan,
    /// without testing the items themselves. A superset of
    /// [`QuadTree::query`]; its length is the number of intersection tests the
    /// query performs.
    pub fn query_candidates(&self, bound: &Rect) -> Vec<ItemKey> {
        let mut out = Vec::new();
        self.visit_from(self.root, bound, |node| out.extend_from_slice(&node.items));
        out
    }

    pub(crate) fn query_from<F>(
        &self,
        start: NodeKey,
        bound: &Rect,
        exclude: Option<ItemKey>,
        mut f: F,
    ) where
        F: FnMut(ItemKey),
    {
        self.visit_from(start, bound, |node| {
            for &item in &node.items {
                if Some(item) != exclude && self.items[item].bound.intersects(bound) {
                    f(item);
                }
            }
        });
    }

    /// Visits `start` and descends into the children that can hold matches:
    /// the single child that contains `bound` when there is one, otherwise
    /// every child whose region intersects it. Each item lives in exactly one
    /// node, so nothing is reported twice.
    fn visit_from<F>(&self, start: NodeKey, bound: &Rect, mut f: F)
    where
        F: FnMut(&Node),
    {
        let mut stack = NodeStack::new();
        stack.push(start);
        while let Some(key) = stack.pop() {
            let node = &self.nodes[key];
            f(node);

            let Some(children) = node.children else {
                continue;
            };
            if let Some(child) = self.route(key, bound) {
                stack.push(child);
            } else {
                for child in children {
                    if self.nodes[child].bounds.intersects(bound) {
                        stack.push(child);
                    }
                }
            }
        }
    }
}
