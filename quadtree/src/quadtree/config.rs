#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Direct items a leaf may hold before it subdivides. Must be at least 1.
    pub capacity: usize,
    /// Deepest level that may be created; nodes at this depth never subdivide.
    pub max_depth: usize,
}

impl Config {
    pub fn new(capacity: usize, max_depth: usize) -> Self {
        Self {
            capacity,
            max_depth,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: 8,
            max_depth: 4,
        }
    }
}
