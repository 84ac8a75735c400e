//! Parsing command-line arguments.

use crate::settings::Settings;
use clap::{command, value_parser, Arg, ArgAction, Error as ClapError};
use lifestep_lib::{rules::Life, Config};
use log::info;
use std::{error::Error, path::PathBuf};

fn parse_char(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(String::from("must be exactly one character")),
    }
}

/// A struct to store the parse results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Args {
    workers: Option<usize>,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    rule: Option<String>,
    alive: Option<char>,
    dead: Option<char>,
    show_initial: bool,
    trace: bool,
    quiet: bool,
}

/// Everything needed for a run, after merging the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) config: Config,
    pub(crate) input: Option<PathBuf>,
    pub(crate) alive: char,
    pub(crate) dead: char,
    pub(crate) show_initial: bool,
    pub(crate) trace: bool,
    pub(crate) quiet: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, ClapError> {
        Args::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(iter: I) -> Result<Self, ClapError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let app = command!()
            .long_about(
                "Runs Conway's Game of Life on a square grid for a fixed number of \
                 generations, splitting the rows among worker threads.\n\
                 \n\
                 The input starts with a line holding the grid size and the number \
                 of generations, followed by one line per row.\n\
                 * Living cells are represented by `x` (see --alive);\n\
                 * Any other character is a dead cell.\n\
                 \n\
                 Cells outside the grid are dead: edges do not wrap around.\n",
            )
            .arg(
                Arg::new("WORKERS")
                    .help("Number of worker threads")
                    .long_help(
                        "Number of worker threads\n\
                         Defaults to 1. It is reduced to the grid size if larger, \
                         and raised to 1 if it is 0.\n",
                    )
                    .index(1)
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("INPUT")
                    .help("Reads the grid from this file instead of the standard input")
                    .short('i')
                    .long("input")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads settings from a .toml, .yaml or .json file")
                    .long_help(
                        "Reads settings from a .toml, .yaml or .json file\n\
                         Keys: workers, rule, alive, dead, show_initial, trace, quiet.\n\
                         Command-line arguments take precedence.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton [default: B3/S23]")
                    .long_help(
                        "Rule of the cellular automaton [default: B3/S23]\n\
                         Supports totalistic Life-like rules.\n",
                    )
                    .short('r')
                    .long("rule")
                    .value_parser(|d: &str| {
                        d.parse::<Life>()
                            .map(|_| d.to_string())
                            .map_err(|e| e.to_string())
                    }),
            )
            .arg(
                Arg::new("ALIVE")
                    .help("Character for living cells [default: x]")
                    .long("alive")
                    .value_parser(parse_char),
            )
            .arg(
                Arg::new("DEAD")
                    .help("Character for dead cells when printing [default: space]")
                    .long("dead")
                    .value_parser(parse_char),
            )
            .arg(
                Arg::new("SHOWINITIAL")
                    .help("Prints the initial grid")
                    .long("show-initial")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("TRACE")
                    .help("Prints every generation")
                    .short('t')
                    .long("trace")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("QUIET")
                    .help("Does not print the final grid")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue),
            );

        let matches = app.try_get_matches_from(iter)?;

        Ok(Args {
            workers: matches.get_one::<usize>("WORKERS").copied(),
            input: matches.get_one::<PathBuf>("INPUT").cloned(),
            config: matches.get_one::<PathBuf>("CONFIG").cloned(),
            rule: matches.get_one::<String>("RULE").cloned(),
            alive: matches.get_one::<char>("ALIVE").copied(),
            dead: matches.get_one::<char>("DEAD").copied(),
            show_initial: matches.get_flag("SHOWINITIAL"),
            trace: matches.get_flag("TRACE"),
            quiet: matches.get_flag("QUIET"),
        })
    }

    /// Merges the arguments with the settings file, if any.
    pub(crate) fn resolve(self) -> Result<Options, Box<dyn Error>> {
        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        self.merge(settings)
    }

    fn merge(self, settings: Settings) -> Result<Options, Box<dyn Error>> {
        let workers = match self.workers.or(settings.workers) {
            Some(workers) => workers,
            None => {
                info!("using the default number of workers (1)");
                1
            }
        };
        let mut config = Config::new(workers);
        if let Some(rule) = self.rule.or(settings.rule) {
            config = config.set_rule_string(rule);
        }
        config.rule()?;

        Ok(Options {
            config,
            input: self.input,
            alive: self.alive.or(settings.alive).unwrap_or('x'),
            dead: self.dead.or(settings.dead).unwrap_or(' '),
            show_initial: self.show_initial || settings.show_initial,
            trace: self.trace || settings.trace,
            quiet: self.quiet || settings.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() -> Result<(), Box<dyn Error>> {
        let options = Args::parse_from(["lifestep"])?.resolve()?;
        assert_eq!(options.config, Config::default());
        assert_eq!(options.alive, 'x');
        assert_eq!(options.dead, ' ');
        assert_eq!(options.input, None);
        assert!(!options.show_initial && !options.trace && !options.quiet);
        Ok(())
    }

    #[test]
    fn workers() -> Result<(), Box<dyn Error>> {
        let options = Args::parse_from(["lifestep", "8"])?.resolve()?;
        assert_eq!(options.config.workers, 8);
        Ok(())
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Args::parse_from(["lifestep", "2", "3"]).is_err());
        assert!(Args::parse_from(["lifestep", "-2"]).is_err());
        assert!(Args::parse_from(["lifestep", "two"]).is_err());
        assert!(Args::parse_from(["lifestep", "--alive", "xx"]).is_err());
        assert!(Args::parse_from(["lifestep", "--rule", "B3/S2x"]).is_err());
    }

    #[test]
    fn arguments_override_settings() -> Result<(), Box<dyn Error>> {
        let settings = Settings {
            workers: Some(4),
            rule: Some(String::from("B36/S23")),
            alive: Some('o'),
            dead: Some('.'),
            show_initial: true,
            trace: false,
            quiet: false,
        };
        let args = Args::parse_from(["lifestep", "2", "--alive", "#", "-q"])?;
        let options = args.merge(settings)?;
        assert_eq!(options.config, Config::new(2).set_rule_string("B36/S23"));
        assert_eq!(options.alive, '#');
        assert_eq!(options.dead, '.');
        assert!(options.show_initial);
        assert!(options.quiet);
        Ok(())
    }

    #[test]
    fn invalid_rule_in_settings() -> Result<(), Box<dyn Error>> {
        let settings = Settings {
            rule: Some(String::from("life")),
            ..Settings::default()
        };
        assert!(Args::parse_from(["lifestep"])?.merge(settings).is_err());
        Ok(())
    }
}
