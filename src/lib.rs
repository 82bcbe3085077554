// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod engine;
pub mod grid;
pub mod heuristic;
pub mod moves;
pub mod solution_formatter;
pub mod solver;
pub mod state;

pub use crate::config::{Config, Heuristic};
pub use crate::data::{Cell, Dir, Pos};
pub use crate::engine::{apply_move, replay, Blocked};
pub use crate::grid::{Grid, ParserErr};
pub use crate::moves::{Move, Moves};
pub use crate::solver::{SolverErr, SolverOk};

pub trait Solve {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr>;
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_levels() {
        // (level, expected moves or None if unsolvable)
        let levels = [
            ("levels/custom/00-solved.txt", Some("")),
            ("levels/custom/01-simplest.txt", Some("R")),
            ("levels/custom/02-one-way.txt", Some("UU")),
            ("levels/custom/03-two-boxes-ordered.txt", Some("UULLLRRDDLURUL")),
            ("levels/custom/no-solution.txt", None),
            ("levels/microban/1.txt", Some("DLURRRDLULLDDRULURUULDRDDRRULDLUU")),
        ];

        for &(level_path, expected) in &levels {
            for &heuristic in &[Heuristic::Greedy, Heuristic::Matching] {
                test_level(level_path, heuristic, expected);
            }
        }
    }

    fn test_level(level_path: &str, heuristic: Heuristic, expected: Option<&str>) {
        println!("Solving {} using {}", level_path, heuristic);

        let level: Grid = fs::read_to_string(level_path).unwrap().parse().unwrap();
        let solution = level.solve(&Config::with_heuristic(heuristic)).unwrap();
        println!("{:?}", solution);

        match solution.moves {
            None => assert_eq!(expected, None),
            Some(ref moves) => {
                assert_eq!(Some(moves.to_string().as_str()), expected);
                assert!(replay(&level, moves.dirs()).is_solved());
            }
        }
    }

    #[test]
    fn malformed_level() {
        let level: Grid = fs::read_to_string("levels/custom/no-player.txt")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(
            level.solve(&Config::default()).unwrap_err(),
            SolverErr::MalformedLevel
        );
    }
}
