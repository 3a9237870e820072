use clap::{App, Arg};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

use disksched::trace::{set_flags, Flags};
use disksched::utils::{run_session, SessionConfig};
use disksched::{Algorithm, Boundary, Direction, SweepConfig};

lazy_static! {
    static ref ALGORITHM_RE: Regex = Regex::new(r"(?i)^([1-4]|FCFS|SSTF|SCAN|C-?SCAN)$")
        .expect("algorithm pattern is valid");
}

fn valid_algorithm(value: &str) -> Result<(), String> {
    if ALGORITHM_RE.is_match(value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid algorithm: {}. Must be one of 1-4, FCFS, SSTF, SCAN or C-SCAN",
            value
        ))
    }
}

fn valid_disk_size(value: &str) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(()),
        _ => Err(format!("Invalid disk size: {}. Must be a positive integer", value)),
    }
}

struct Args {
    config: SessionConfig,
    inputfile: Option<String>,
}

fn parse_args(actual_args: &[String]) -> Args {
    let matches = App::new("Disk scheduling simulator")
        .arg(
            Arg::new("algorithm")
                .short('s')
                .long("algorithm")
                .takes_value(true)
                .validator(valid_algorithm)
                .help("algorithm (1-4, FCFS, SSTF, SCAN, C-SCAN); asked for when omitted"),
        )
        .arg(
            Arg::new("direction")
                .short('d')
                .long("direction")
                .takes_value(true)
                .possible_values(["up", "down"])
                .default_value("up")
                .help("initial sweep direction for SCAN and C-SCAN"),
        )
        .arg(
            Arg::new("disk_size")
                .long("disk-size")
                .takes_value(true)
                .validator(valid_disk_size)
                .help("sweep to the edges of a disk with this many tracks"),
        )
        .arg(
            Arg::new("v_flag")
                .short('v')
                .required(false)
                .help("trace every head movement"),
        )
        .arg(
            Arg::new("q_flag")
                .short('q')
                .required(false)
                .help("trace the SSTF queue"),
        )
        .arg(
            Arg::new("inputfile")
                .help("input file, standard input when omitted")
                .required(false)
                .index(1),
        )
        .get_matches_from(actual_args);

    set_flags(Flags {
        v_option: matches.is_present("v_flag"),
        q_option: matches.is_present("q_flag"),
    });

    let direction = match matches.value_of("direction") {
        Some("down") => Direction::Down,
        _ => Direction::Up,
    };
    let boundary = match matches.value_of("disk_size").and_then(|v| v.parse().ok()) {
        Some(disk_size) => Boundary::DiskEdge { disk_size },
        None => Boundary::LastRequest,
    };

    Args {
        config: SessionConfig {
            algorithm: matches.value_of("algorithm").and_then(Algorithm::from_choice),
            sweep: SweepConfig {
                direction,
                boundary,
            },
        },
        inputfile: matches.value_of("inputfile").map(str::to_owned),
    }
}

fn actual_main_fn(args: &Args) -> disksched::Result<()> {
    let input: Box<dyn BufRead> = match &args.inputfile {
        Some(inputfile) => Box::new(BufReader::new(File::open(inputfile)?)),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(input, &mut out, &args.config)
}

fn main() {
    let args = std::env::args().collect::<Vec<String>>();

    // Parse command line arguments
    let args = parse_args(&args);

    if let Err(err) = actual_main_fn(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
