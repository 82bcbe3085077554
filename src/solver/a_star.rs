use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::data::Pos;
use crate::grid::Grid;
use crate::moves::Moves;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum::<u64>()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let mut ret = false;

        // while because duplicates can be found at a depth where nothing was created yet
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Duplicates discarded total: {}",
            self.total_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "Created but not visited total: {}",
            (created - visited).separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Visited", "Duplicates"
        )?;
        let depths = self.created_states.len().max(self.duplicate_states.len());
        for i in 0..depths {
            let count = |counts: &Vec<u64>| counts.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                count(&self.created_states).separated_string(),
                count(&self.visited_states).separated_string(),
                count(&self.duplicate_states).separated_string()
            )?;
        }
        Ok(())
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total visited: {}", self.total_visited().separated_string())
    }
}

/// Frontier entry. Owns its grid snapshot and its own copy of the path.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) grid: Grid,
    pub(crate) boxes: Vec<Pos>,
    pub(crate) moves: Moves,
    pub(crate) cost: u32,
    pub(crate) priority: u32,
    /// insertion order, makes ties deterministic
    pub(crate) seq: u64,
}

impl SearchNode {
    pub(crate) fn new(
        grid: Grid,
        boxes: Vec<Pos>,
        moves: Moves,
        cost: u32,
        priority: u32,
        seq: u64,
    ) -> Self {
        SearchNode {
            grid,
            boxes,
            moves,
            cost,
            priority,
            seq,
        }
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        // lowest priority first, then shortest path, then oldest
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
