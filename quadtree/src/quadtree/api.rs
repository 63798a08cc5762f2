use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::debug;

impl<T> QuadTree<T> {
    /// Stores an item without inserting it into the tree.
    pub fn add(&mut self, mut item: Collidable<T>) -> ItemKey {
        item.owner = None;
        self.items.insert(item)
    }

    /// Stores an item and inserts it.
    pub fn insert_item(&mut self, item: Collidable<T>) -> ItemKey {
        let key = self.add(item);
        self.link(self.root, key);
        key
    }

    /// Inserts a stored item, routing it as deep as its bound allows.
    ///
    /// Fails without side effects if the item is already tracked.
    pub fn insert(&mut self, key: ItemKey) -> QuadtreeResult<()> {
        let item = self.items.get(key).ok_or(QuadtreeError::UnknownItem)?;
        if item.is_tracked() {
            return Err(QuadtreeError::AlreadyTracked);
        }
        self.link(self.root, key);
        Ok(())
    }

    /// Unlinks a tracked item from whichever node holds it and collapses any
    /// subtree left empty. The item stays stored.
    pub fn remove(&mut self, key: ItemKey) -> QuadtreeResult<()> {
        let owner = self.tracked_owner(key)?;
        self.unlink(key, owner);
        self.collapse_from(owner);
        Ok(())
    }

    /// Re-places a tracked item whose bound was changed in place.
    ///
    /// The cost is proportional to the levels crossed, not to the size of the
    /// tree.
    pub fn update(&mut self, key: ItemKey) -> QuadtreeResult<()> {
        self.tracked_owner(key)?;
        self.reroute(key);
        Ok(())
    }

    /// Sets a new bound, re-placing the item if it is tracked.
    pub fn relocate(&mut self, key: ItemKey, bound: Rect) -> QuadtreeResult<()> {
        let item = self.items.get_mut(key).ok_or(QuadtreeError::UnknownItem)?;
        item.bound = bound;
        if item.is_tracked() {
            self.reroute(key);
        }
        Ok(())
    }

    /// Updates every tracked item, then pushes down any item left on an
    /// internal node that fits one of its children.
    pub fn update_all(&mut self) {
        let tracked: Vec<ItemKey> = self
            .items
            .iter()
            .filter(|(_, item)| item.is_tracked())
            .map(|(key, _)| key)
            .collect();
        for key in tracked {
            self.reroute(key);
        }
        self.settle();
    }

    /// Removes an item from storage, unlinking it first if it is tracked.
    pub fn take(&mut self, key: ItemKey) -> Option<Collidable<T>> {
        if let Some(owner) = self.items.get(key)?.owner {
            self.unlink(key, owner);
            self.collapse_from(owner);
        }
        self.items.remove(key)
    }

    /// Unlinks every item and drops all nodes below the root. Items stay
    /// stored.
    pub fn clear(&mut self) {
        self.clear_subtree(self.root);
        debug!(items = self.items.len(), "cleared tree");
    }

    /// Clears the tree and hands back every stored item.
    pub fn drain(&mut self) -> impl Iterator<Item = (ItemKey, Collidable<T>)> + '_ {
        self.clear();
        self.items.drain()
    }

    pub fn get(&self, key: ItemKey) -> Option<&Collidable<T>> {
        self.items.get(key)
    }

    /// Mutable access to a stored item's bound. Call [`QuadTree::update`]
    /// after changing it on a tracked item, or use [`QuadTree::relocate`].
    pub fn bound_mut(&mut self, key: ItemKey) -> Option<&mut Rect> {
        self.items.get_mut(key).map(|item| &mut item.bound)
    }

    pub fn data_mut(&mut self, key: ItemKey) -> Option<&mut T> {
        self.items.get_mut(key).map(|item| &mut item.data)
    }

    /// Bound and payload together, for callers that move an item based on
    /// its own state. The node bookkeeping is never handed out.
    pub fn get_mut(&mut self, key: ItemKey) -> Option<(&mut Rect, &mut T)> {
        self.items
            .get_mut(key)
            .map(|item| (&mut item.bound, &mut item.data))
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Number of stored items, tracked or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &Collidable<T>)> {
        self.items.iter()
    }
}
