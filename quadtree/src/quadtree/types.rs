use common::shapes::Rect;
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// Handle to a node of a [`QuadTree`](super::QuadTree).
    pub struct NodeKey;

    /// Handle to an item stored in a [`QuadTree`](super::QuadTree).
    pub struct ItemKey;
}

/// One of the four equal subdivisions of a node, in subdivision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Quadrant of `region` that `bound` lies in, or `None` when `bound`
    /// touches or crosses either midline of `region`.
    pub fn locate(region: &Rect, bound: &Rect) -> Option<Quadrant> {
        let (mid_x, mid_y) = region.center();
        let left = bound.right() < mid_x;
        let right = bound.left() > mid_x;

        if bound.bottom() < mid_y {
            if left {
                return Some(Quadrant::TopLeft);
            }
            if right {
                return Some(Quadrant::TopRight);
            }
        } else if bound.top() > mid_y {
            if left {
                return Some(Quadrant::BottomLeft);
            }
            if right {
                return Some(Quadrant::BottomRight);
            }
        }
        None
    }
}

/// A rectangle tracked by the tree together with the caller's payload.
///
/// The payload is never inspected. `owner` is written only by the tree and
/// names the single node whose item list holds this entry.
#[derive(Debug, Clone)]
pub struct Collidable<T> {
    pub bound: Rect,
    pub data: T,
    pub(crate) owner: Option<NodeKey>,
}

impl<T> Collidable<T> {
    pub fn new(bound: Rect, data: T) -> Self {
        Self {
            bound,
            data,
            owner: None,
        }
    }

    pub fn owner(&self) -> Option<NodeKey> {
        self.owner
    }

    pub fn is_tracked(&self) -> bool {
        self.owner.is_some()
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) bounds: Rect,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeKey>,
    // Either no children or all four.
    pub(crate) children: Option<[NodeKey; 4]>,
    pub(crate) items: Vec<ItemKey>,
}

impl Node {
    pub(crate) fn new(bounds: Rect, depth: usize, parent: Option<NodeKey>) -> Self {
        Self {
            bounds,
            depth,
            parent,
            children: None,
            items: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[inline(always)]
    pub(crate) fn is_empty_leaf(&self) -> bool {
        self.is_leaf() && self.items.is_empty()
    }
}

pub(crate) type NodeStack = SmallVec<[NodeKey; 64]>;
