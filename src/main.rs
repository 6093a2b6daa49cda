use log::{debug, info};
use sparselife::{Cell, CoordinateList, PositionEncoder, Universe};
use std::{
    collections::HashSet,
    io::{self, Write},
};

mod console;
mod error;
mod options;
mod seed;

use console::{ConsoleReader, RULE};
use error::Error;

/// Where the initial generation comes from
enum Source {
    Cells(HashSet<Cell>),
    /// Nothing was entered on the console
    Nothing,
}

fn args_to_alive(args: &options::Args) -> Result<Source, Error> {
    if let Some(file_name) = args.input_file() {
        info!("reading initial cells from {file_name}");
        let text = std::fs::read_to_string(file_name)?;
        return Ok(Source::Cells(CoordinateList.decode(&text)));
    }

    if let Some(fill) = args.fill()? {
        info!("generating initial cells: {fill:?}");
        return Ok(Source::Cells(fill.cells().collect()));
    }

    let stdin = io::stdin();
    let mut console = ConsoleReader::new(stdin.lock(), io::stdout());
    console.banner()?;
    let text = console.read_pattern()?;
    if text.is_empty() {
        return Ok(Source::Nothing);
    }
    Ok(Source::Cells(CoordinateList.decode(&text)))
}

/// Advances the initial cells and prints the resulting generation
///
/// Returns the formatted generation, or `None` when there was no input.
fn run<W: Write>(
    source: Source,
    generations: usize,
    threads: bool,
    out: &mut W,
) -> io::Result<Option<String>> {
    let alive = match source {
        Source::Cells(alive) => alive,
        Source::Nothing => {
            writeln!(out, "\nNo input provided. Exiting.")?;
            return Ok(None);
        }
    };
    debug!("initial generation: {} alive", alive.len());

    let mut universe = Universe::new(alive);
    for _ in 0..generations {
        if threads {
            universe.advance_parallel();
        } else {
            universe.advance();
        }
    }

    let output = CoordinateList.encode(universe.live_cells());
    writeln!(out, "\nNext generation:")?;
    writeln!(out, "{output}")?;
    writeln!(out, "{RULE}")?;
    Ok(Some(output))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    let generations = args.generations()?;
    let source = args_to_alive(&args)?;

    let output = run(source, generations, args.multithreading(), &mut io::stdout())?;
    if let (Some(output), Some(file_name)) = (output, args.output_file()) {
        info!("writing next generation to {file_name}");
        std::fs::write(file_name, format!("{output}\n"))?;
    }

    Ok(())
}
