use std::error::Error;
use std::fs;
use std::process;

use clap::{crate_version, App, Arg, ArgGroup};
use log::debug;

use sokoban_astar::config::Config;
use sokoban_astar::grid::Grid;
use sokoban_astar::solution_formatter::SolutionFormatter;
use sokoban_astar::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .version(crate_version!())
        .about("Finds a sequence of moves that puts every box on a goal")
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["greedy", "matching"])
                .default_value("greedy")
                .help("how to estimate the remaining cost"),
        )
        .arg(
            Arg::with_name("max-expansions")
                .long("max-expansions")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding N states"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats when reaching a new depth"),
        )
        .arg(
            Arg::with_name("pushes")
                .long("pushes")
                .help("print the level after every push"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the level after every move"),
        )
        .group(ArgGroup::with_name("replay").args(&["pushes", "steps"]))
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let config = Config {
        heuristic: parse_arg(&matches, "heuristic"),
        max_expansions: match matches.value_of("max-expansions") {
            Some(_) => Some(parse_arg(&matches, "max-expansions")),
            None => None,
        },
        print_status: matches.is_present("status"),
    };
    debug!("{:?}", config);

    let level = load_level(path).unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(&config).unwrap_or_else(|err| {
        eprintln!("Can't solve level: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);

    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            let include_steps = matches.is_present("steps");
            if include_steps || matches.is_present("pushes") {
                print!("{}", SolutionFormatter::new(&level, &moves, include_steps));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
}

fn load_level(path: &str) -> Result<Grid, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(text.parse()?)
}

fn parse_arg<T>(matches: &clap::ArgMatches<'_>, name: &str) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = matches.value_of(name).unwrap();
    value.parse().unwrap_or_else(|err| {
        eprintln!("Invalid value for --{}: {}", name, err);
        process::exit(1);
    })
}
