use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use env_logger::{Builder, Target};
use nmea0183_gps::{Sample, parse};

fn print(line: &str, result: Result<Sample, nmea0183_gps::ParseError>) {
    match result {
        Ok(sample) => {
            println!("{}: {:?}", sample.sentence_type(), sample);
        }
        Err(e) => {
            println!("Parsing error occurred for '{}': {}", line, e);
        }
    }
}

/// Parses every line of a log file (or stdin) and prints the outcome.
///
/// Run with `RUST_LOG=debug` to see why sentences are rejected.
fn main() -> io::Result<()> {
    Builder::from_default_env()
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let reader: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.is_empty() {
            continue;
        }

        print(line, parse(line));
    }

    Ok(())
}
