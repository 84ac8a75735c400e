mod args;
mod settings;
mod trace;

use args::Args;
use lifestep_lib::{input::read_dump, ReadGrid};
use log::info;
use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Write},
    process,
};
use trace::Trace;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let options = args.resolve()?;

    let dump = match &options.input {
        Some(path) => read_dump(BufReader::new(File::open(path)?), options.alive)?,
        None => read_dump(io::stdin().lock(), options.alive)?,
    };
    info!(
        "read a {}x{} grid with {} living cells",
        dump.size,
        dump.size,
        dump.grid.population()
    );

    let stdout = io::stdout();
    if options.show_initial {
        let mut out = stdout.lock();
        writeln!(out, "Initial:")?;
        write!(out, "{}", dump.grid.plaintext(options.alive, options.dead))?;
    }

    let mut simulation = options.config.simulation(&dump.grid, dump.steps)?;
    if options.trace {
        let mut trace = Trace::new(io::stdout(), options.alive, options.dead);
        simulation.run_with(|generation, current| trace.generation(generation, current));
        trace.finish()?;
    } else {
        simulation.run();
    }

    if !options.quiet {
        let mut out = stdout.lock();
        writeln!(out, "Final:")?;
        write!(
            out,
            "{}",
            simulation.current().plaintext(options.alive, options.dead)
        )?;
    }
    Ok(())
}
