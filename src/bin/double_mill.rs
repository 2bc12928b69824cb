use std::io;

use cowboy_checkers::board::read_board;
use cowboy_checkers::detect::Side;
use cowboy_checkers::positions;
use cowboy_checkers::report::Report;
use cowboy_checkers::topology::Topology;

const USAGE: &str = "Usage: double_mill [--side white|black] [--json] [--position NAME] [--list]\n\n\
Reads a 7-row board from stdin (W = white, B = black, anything else empty)\n\
unless --position names a built-in board.";

struct Options {
    side: Side,
    json: bool,
    position: Option<String>,
    list: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        side: Side::White,
        json: false,
        position: None,
        list: false,
    };

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => opts.json = true,
            "--list" => opts.list = true,
            "--side" => {
                opts.side = match it.next().map(String::as_str) {
                    Some("white") => Side::White,
                    Some("black") => Side::Black,
                    Some(other) => return Err(format!("unknown side: {other}")),
                    None => return Err("--side needs a value".to_string()),
                };
            }
            "--position" => match it.next() {
                Some(name) => opts.position = Some(name.clone()),
                None => return Err("--position needs a value".to_string()),
            },
            "-h" | "--help" => return Err(String::new()),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("{msg}\n");
            }
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if opts.list {
        for name in positions::names() {
            println!("{name}");
        }
        return;
    }

    let occ = match &opts.position {
        Some(name) => {
            let Some(pos) = positions::by_name(name) else {
                eprintln!(
                    "Unknown position: {name}\n\nAvailable positions:\n  - {}",
                    positions::names().join("\n  - ")
                );
                std::process::exit(2);
            };
            pos.occupancy()
        }
        None => read_board(io::stdin().lock()),
    };
    let occ = match occ {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Failed to read board: {e}");
            std::process::exit(1);
        }
    };

    let report = Report::new(&occ, opts.side, Topology::standard());

    if opts.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.verdict());
    }
}
