use rand::Rng;

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `(x, y)` is the origin corner and the y axis grows downward, so `top()` is
/// the smaller y. Every predicate treats the edges as part of the rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Midpoint of the rectangle; the midlines used for quadrant routing.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when every component is finite and the size is non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// True iff `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// True iff the two rectangles overlap or touch.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Splits into four equal quadrants ordered top-right, top-left,
    /// bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Rect; 4] {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        let mid_x = self.x + half_w;
        let mid_y = self.y + half_h;
        [
            Rect::new(mid_x, self.y, half_w, half_h),
            Rect::new(self.x, self.y, half_w, half_h),
            Rect::new(self.x, mid_y, half_w, half_h),
            Rect::new(mid_x, mid_y, half_w, half_h),
        ]
    }

    /// Places a `width` x `height` rectangle uniformly inside this one. Axes
    /// that cannot fit the requested size collapse to the origin edge.
    pub fn random_inside<R: Rng>(&self, width: f64, height: f64, rng: &mut R) -> Rect {
        Rect::new(
            Self::safe_rand(rng, self.left(), self.right() - width),
            Self::safe_rand(rng, self.top(), self.bottom() - height),
            width,
            height,
        )
    }

    fn safe_rand<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}
