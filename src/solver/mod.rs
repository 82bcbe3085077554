pub(crate) mod a_star;

use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info, trace};

use crate::config::{Config, Heuristic};
use crate::data::{Pos, DIRECTIONS};
use crate::engine;
use crate::grid::Grid;
use crate::heuristic;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

pub use self::a_star::Stats;
use self::a_star::SearchNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// The level has no player.
    MalformedLevel,
    /// Gave up after expanding this many states.
    ExpansionLimit(u64),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::MalformedLevel => write!(f, "Malformed level - no player"),
            SolverErr::ExpansionLimit(limit) => {
                write!(f, "Gave up after expanding {} states", limit)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if the level has no solution
    pub moves: Option<Moves>,
    pub stats: Stats,
    pub heuristic: Heuristic,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats, heuristic: Heuristic) -> Self {
        Self {
            moves,
            stats,
            heuristic,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", self.heuristic, moves.lurd())?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Grid {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(self, config)
    }
}

/// Searches for the shortest sequence of moves (as far as the heuristic allows) that puts every box on a goal.
///
/// Runs to completion on the calling thread. A level without a solution is not an error,
/// the result just has no moves.
pub fn solve(grid: &Grid, config: &Config) -> Result<SolverOk, SolverErr> {
    let player_pos = grid.player().ok_or(SolverErr::MalformedLevel)?;
    debug!("Searching using {} heuristic", config.heuristic);
    search(grid, player_pos, config)
}

/// Boxes and goals are the same set - fewer boxes than goals is never solved.
pub fn is_goal_state(boxes: &[Pos], goals: &[Pos]) -> bool {
    boxes.len() == goals.len() && boxes.iter().all(|b| goals.contains(b))
}

fn search(initial: &Grid, player_pos: Pos, config: &Config) -> Result<SolverOk, SolverErr> {
    // goals never move
    let goals = initial.goals();

    let mut stats = Stats::new();
    let mut visited = FnvHashSet::default();
    let mut to_visit = BinaryHeap::new();
    let mut seq = 0;
    let mut expanded = 0;

    let initial_boxes = initial.boxes();
    visited.insert(State::new(player_pos, initial_boxes.clone()));
    let start = SearchNode::new(initial.clone(), initial_boxes, Moves::default(), 0, 0, seq);
    stats.add_created(start.cost);
    to_visit.push(start);

    while let Some(cur) = to_visit.pop() {
        if stats.add_visited(cur.cost) && config.print_status {
            println!("Visited new depth: {}", cur.cost);
            println!("{:?}", stats);
        }

        if is_goal_state(&cur.boxes, &goals) {
            info!("Solved after expanding {} states", expanded);
            return Ok(SolverOk::new(Some(cur.moves), stats, config.heuristic));
        }

        if let Some(limit) = config.max_expansions {
            if expanded >= limit {
                info!("Expansion limit {} reached", limit);
                return Err(SolverErr::ExpansionLimit(limit));
            }
        }
        expanded += 1;

        for &dir in &DIRECTIONS {
            let (new_grid, mov) = match engine::step(&cur.grid, dir) {
                Ok(res) => res,
                Err(_) => continue,
            };

            let cost = cur.cost + 1;
            let new_player_pos = match new_grid.player() {
                Some(pos) => pos,
                None => continue,
            };
            let new_state = State::new(new_player_pos, new_grid.boxes());
            if visited.contains(&new_state) {
                stats.add_duplicate(cost);
                continue;
            }
            let boxes = new_state.boxes.clone();
            visited.insert(new_state);

            let priority = cost + heuristic::estimate(config.heuristic, &boxes, &goals);
            let mut moves = cur.moves.clone();
            moves.add(mov);

            seq += 1;
            trace!("Created state {} with priority {}", seq, priority);
            let next_node = SearchNode::new(new_grid, boxes, moves, cost, priority, seq);
            stats.add_created(cost);
            to_visit.push(next_node);
        }
    }

    debug!("Frontier exhausted after expanding {} states", expanded);
    Ok(SolverOk::new(None, stats, config.heuristic))
}
