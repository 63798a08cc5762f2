mod api;
mod config;
mod core;
mod maintenance;
mod node_ref;
mod query_rect;
mod types;

pub use config::Config;
pub use node_ref::NodeRef;
pub use types::{Collidable, ItemKey, NodeKey, Quadrant};

use common::shapes::Rect;
use slotmap::SlotMap;
use types::{Node, NodeStack};

/// A mutable region quadtree over axis-aligned rectangles.
///
/// Nodes and items live in generational arenas. A node owns its four children
/// by key and refers to its parent by key; an item records the key of the one
/// node that currently holds it. Callers address items through [`ItemKey`]
/// handles, so an item can only be dropped through [`QuadTree::take`] (or by
/// dropping the whole tree), which unlinks it first.
///
/// The tree is single-threaded: every operation runs to completion and takes
/// `&mut self` when it mutates.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    nodes: SlotMap<NodeKey, Node>,
    items: SlotMap<ItemKey, Collidable<T>>,
    root: NodeKey,
    config: Config,
}
