use std::process::Command;

use assert_cmd::prelude::*;

#[test]
fn run_one_way() {
    let output = r"Solving levels/custom/02-one-way.txt...
States created total: 4
Unique states visited total: 3
Duplicates discarded total: 0
Created but not visited total: 1

Depth          Created        Visited        Duplicates
0:             1              1              0
1:             1              1              0
2:             2              1              0

Found solution:
UU
Moves: 2
Pushes: 2
";

    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("levels/custom/02-one-way.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_pushes_matching() {
    let output = r"Solving levels/custom/01-simplest.txt...
States created total: 2
Unique states visited total: 2
Duplicates discarded total: 0
Created but not visited total: 0

Depth          Created        Visited        Duplicates
0:             1              1              0
1:             1              1              0

Found solution:
#####
#@$.#
#####

#####
# @*#
#####

R
Moves: 1
Pushes: 1
";

    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("--heuristic")
        .arg("matching")
        .arg("--pushes")
        .arg("levels/custom/01-simplest.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = r"Solving levels/custom/no-solution.txt...
States created total: 1
Unique states visited total: 1
Duplicates discarded total: 0
Created but not visited total: 0

Depth          Created        Visited        Duplicates
0:             1              1              0

No solution
";

    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("levels/custom/no-solution.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_player() {
    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("levels/custom/no-player.txt")
        .assert()
        .failure()
        .stdout("Solving levels/custom/no-player.txt...\n")
        .stderr("Can't solve level: Malformed level - no player\n");
}

#[test]
fn run_expansion_limit() {
    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("--max-expansions")
        .arg("3")
        .arg("levels/custom/03-two-boxes-ordered.txt")
        .assert()
        .failure()
        .stderr("Can't solve level: Gave up after expanding 3 states\n");
}

#[test]
fn run_missing_file() {
    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("levels/custom/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_replay_args() {
    // doesn't check stderr - only that it fails and doesn't print to stdout
    Command::cargo_bin("sokoban-astar")
        .unwrap()
        .arg("--pushes")
        .arg("--steps")
        .arg("levels/custom/02-one-way.txt")
        .assert()
        .failure()
        .stdout("");
}
