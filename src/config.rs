use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Each box takes the closest goal not yet taken by an earlier box.
    Greedy,
    /// Cheapest assignment of boxes to goals.
    Matching,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Greedy => write!(f, "greedy"),
            Heuristic::Matching => write!(f, "matching"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl Display for UnknownHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown heuristic: {}", self.0)
    }
}

impl Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Heuristic::Greedy),
            "matching" => Ok(Heuristic::Matching),
            _ => Err(UnknownHeuristic(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub heuristic: Heuristic,
    /// Give up after expanding this many states.
    pub max_expansions: Option<u64>,
    /// Print stats every time the search reaches a new depth.
    pub print_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: Heuristic::Greedy,
            max_expansions: None,
            print_status: false,
        }
    }
}

impl Config {
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Config {
            heuristic,
            ..Config::default()
        }
    }
}
