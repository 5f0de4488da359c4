use tilewalk_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Open-list entry, ordered so that `BinaryHeap` pops the smallest `f`
/// first, then the smallest `h`, then the earliest push.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search workspace for one map rectangle.
///
/// `PathRange` owns the per-tile node array and scratch buffers so repeated
/// searches on the same level do not allocate after the first one. Nodes
/// are invalidated lazily with a generation counter.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) seq: u64,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a workspace for the given map rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            seq: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Switch to another rectangle, e.g. after a level load.
    ///
    /// The node array is only reallocated when the new rectangle does not
    /// fit the current capacity.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if rng.len() <= self.nodes.len() {
            self.next_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(rng.len(), Node::default());
        self.generation = 0;
    }

    /// The map rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start a new search generation, returning its id.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes would look current, so reset them all.
            for n in &mut self.nodes {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.seq = 0;
        self.generation
    }

    /// Convert a `Point` to a node index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a node index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn index_round_trip_with_offset_origin() {
        let pr = PathRange::new(Range::new(2, 3, 7, 9));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(1, 3)), None);
        assert_eq!(pr.idx(Point::new(7, 3)), None);
    }

    #[test]
    fn smaller_range_keeps_capacity() {
        let mut pr = PathRange::new(Range::with_size(20, 20));
        pr.set_range(Range::with_size(5, 5));
        assert_eq!(pr.nodes.len(), 400);
        assert_eq!(pr.width, 5);
        assert!(pr.generation > 0);
    }

    #[test]
    fn larger_range_reallocates() {
        let mut pr = PathRange::new(Range::with_size(5, 5));
        pr.set_range(Range::with_size(20, 20));
        assert_eq!(pr.nodes.len(), 400);
        assert_eq!(pr.range(), Range::with_size(20, 20));
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let mut pr = PathRange::new(Range::with_size(2, 2));
        pr.nodes[3].generation = 1;
        pr.generation = u32::MAX;
        assert_eq!(pr.next_generation(), 1);
        assert!(pr.nodes.iter().all(|n| n.generation == 0));
    }

    #[test]
    fn open_list_order() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 30, h: 10, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 20, h: 10, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 20, h: 0, seq: 2 });
        heap.push(NodeRef { idx: 3, f: 20, h: 0, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathrange_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let pr = PathRange::new(rng);
        let json = serde_json::to_string(&pr).unwrap();
        let back: PathRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), rng.len());
    }
}
