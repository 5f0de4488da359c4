use std::collections::BinaryHeap;

use tilewalk_core::Point;

use crate::PathRange;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::traits::AstarPather;

impl PathRange {
    /// Cheapest path from `from` to `to` with A*, both endpoints included.
    ///
    /// `None` when either endpoint is outside the range or the goal cannot
    /// be reached. Among frontier entries of equal `f` the one with the
    /// smaller estimate is expanded first, then the one queued first, so
    /// equal inputs always give the same path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start = self.idx(from)?;
        let goal = self.idx(to)?;
        if start == goal {
            return Some(vec![from]);
        }

        let generation = self.next_generation();
        let mut frontier = BinaryHeap::new();
        let h = pather.estimate(from, to);
        self.open_node(generation, start, 0, usize::MAX);
        frontier.push(NodeRef { idx: start, f: h, h, seq: self.seq });

        let mut scratch = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        let mut reached = false;

        while let Some(entry) = frontier.pop() {
            let node = &self.nodes[entry.idx];
            if node.generation != generation || !node.open {
                // Superseded by a cheaper entry for the same tile.
                continue;
            }
            if entry.idx == goal {
                reached = true;
                break;
            }
            self.nodes[entry.idx].open = false;
            expanded += 1;

            let here = self.point(entry.idx);
            let g_here = self.nodes[entry.idx].g;
            scratch.clear();
            pather.neighbors(here, &mut scratch);

            for &next in &scratch {
                let Some(ni) = self.idx(next) else { continue };
                let g = g_here + pather.cost(here, next);
                if g >= self.known_cost(generation, ni) {
                    continue;
                }
                self.open_node(generation, ni, g, entry.idx);
                let h = pather.estimate(next, to);
                self.seq += 1;
                frontier.push(NodeRef { idx: ni, f: g + h, h, seq: self.seq });
            }
        }
        self.nbuf = scratch;

        if !reached {
            log::debug!("astar: no path {from} -> {to} ({expanded} nodes expanded)");
            return None;
        }
        let path = self.trace_back(goal);
        log::trace!(
            "astar: {from} -> {to} in {} steps, cost {} ({expanded} nodes expanded)",
            path.len() - 1,
            self.nodes[goal].g
        );
        Some(path)
    }

    /// Best cost found so far for node `i` in this search.
    fn known_cost(&self, generation: u32, i: usize) -> i32 {
        let n = &self.nodes[i];
        if n.generation == generation { n.g } else { UNREACHABLE }
    }

    fn open_node(&mut self, generation: u32, i: usize, g: i32, parent: usize) {
        let n = &mut self.nodes[i];
        n.generation = generation;
        n.g = g;
        n.parent = parent;
        n.open = true;
    }

    /// Follow parent links back from `goal`; the result starts at the
    /// search origin.
    fn trace_back(&self, goal: usize) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(goal), |&i| {
            let parent = self.nodes[i].parent;
            (parent != usize::MAX).then_some(parent)
        })
        .map(|i| self.point(i))
        .collect();
        path.reverse();
        path
    }
}
