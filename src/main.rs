use std::io::IsTerminal;
use std::path::Path;

use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mathobject::describing::describe;
use mathobject::formatting::{Identity, Syntax};
use mathobject::generating::instantiate_all;
use mathobject::merging::{self, Merged};
use mathobject::registry::{Registry, RegistryConfig, TestCase};
use mathobject::rendering::{self, Latex, Terminal};
use mathobject::settings::{InterfaceMode, MathObject, MathObjectSettings, ObjectType};
use mathobject::templating::{self, Catalogue, Listing};

mod problem;

#[derive(Debug, Clone, Copy)]
enum Output {
    Plain,
    Terminal,
    Latex,
}

impl Output {
    fn choose(submatches: &ArgMatches) -> Output {
        if submatches.get_flag("latex") {
            Output::Latex
        } else if submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
            Output::Terminal
        } else {
            Output::Plain
        }
    }

    fn render(&self, fragments: Vec<(Syntax, String)>) -> String {
        match self {
            Output::Plain => rendering::render(&Identity, fragments),
            Output::Terminal => rendering::render(&Terminal, fragments),
            Output::Latex => rendering::render(&Latex, fragments),
        }
    }

    fn list(&self, cases: &[&TestCase]) -> Result<String, tinytemplate::error::Error> {
        match self {
            Output::Plain => templating::fill(&Listing(&Identity), cases),
            Output::Terminal => templating::fill(&Listing(&Terminal), cases),
            Output::Latex => templating::fill(&Listing(&Latex), cases),
        }
    }
}

fn raw_control_chars() -> Arg {
    Arg::new("raw-control-chars")
        .short('R')
        .long("raw-control-chars")
        .action(ArgAction::SetTrue)
        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file.")
}

fn disable() -> Arg {
    Arg::new("disable")
        .long("disable")
        .action(ArgAction::Append)
        .value_parser(value_parser!(ObjectType))
        .help("Leave the given object type out of the registry. May be repeated.")
}

fn filename() -> Arg {
    Arg::new("filename")
        .required(true)
        .help("A JSON file holding one math object, or an array of them making up an exercise.")
}

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn registry_config(submatches: &ArgMatches) -> RegistryConfig {
    RegistryConfig {
        disabled: submatches
            .get_many::<ObjectType>("disable")
            .map(|values| {
                values
                    .copied()
                    .collect()
            })
            .unwrap_or_default(),
    }
}

// Read and decode the input file, then complete every object in it. Any
// failure is presented and ends the program.
fn load_inputs(filename: &Path) -> Vec<Merged<MathObjectSettings>> {
    let content = match merging::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let inputs = match merging::parse(filename, &content) {
        Ok(inputs) => inputs,
        Err(error) => {
            eprintln!("{}", problem::full_loading_error(&error, &content));
            std::process::exit(1);
        }
    };

    let mut results = Vec::with_capacity(inputs.len());
    for (i, input) in inputs
        .into_iter()
        .enumerate()
    {
        match input.convert() {
            Ok(result) => results.push(result),
            Err(error) => {
                eprintln!(
                    "{}",
                    problem::settings_error(&filename.to_string_lossy(), i, &error)
                );
                std::process::exit(1);
            }
        }
    }

    results
}

fn run_describe(submatches: &ArgMatches) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);
    let mode = submatches
        .get_one::<InterfaceMode>("mode")
        .copied();
    let output = Output::choose(submatches);

    let mut index = submatches
        .get_one::<usize>("start")
        .copied()
        .unwrap_or(1);

    debug!(?filename, ?mode, index);

    for result in load_inputs(filename) {
        let object = &result
            .merged
            .object;
        let mode = mode.unwrap_or_else(|| InterfaceMode::infer(object));

        let description = describe(object, mode, index);
        index = description.next_index;

        print!(
            "{}",
            output.render(rendering::description_fragments(
                object.object_type(),
                &description
            ))
        );
    }
}

fn run_instantiate(submatches: &ArgMatches) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);
    let mode = submatches
        .get_one::<InterfaceMode>("mode")
        .copied();
    let seed = submatches
        .get_one::<u64>("seed")
        .copied();
    let output = Output::choose(submatches);

    debug!(?filename, ?mode, ?seed);

    let results = load_inputs(filename);
    let objects: Vec<(&MathObject, InterfaceMode)> = results
        .iter()
        .map(|result| {
            let object = &result
                .merged
                .object;
            (object, mode.unwrap_or_else(|| InterfaceMode::infer(object)))
        })
        .collect();

    let mut failed = false;
    for ((object, _), instance) in objects
        .iter()
        .zip(instantiate_all(&objects, seed))
    {
        let fragments = match instance {
            Ok(text) => rendering::formula_fragments(object.object_type(), &text),
            Err(error) => {
                failed = true;
                rendering::failure_fragments(object.object_type(), &error.message())
            }
        };
        print!("{}", output.render(fragments));
    }

    if failed {
        std::process::exit(1);
    }
}

fn run_merge(submatches: &ArgMatches) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);
    let output = Output::choose(submatches);

    for result in load_inputs(filename) {
        match serde_json::to_string_pretty(&result.merged) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
        print!("{}", output.render(rendering::report_fragments(&result)));
    }
}

fn run_types(submatches: &ArgMatches) {
    let registry = Registry::initialize(&registry_config(submatches));

    for object_type in registry.available_types() {
        println!("{:<14}{}", object_type.as_str(), object_type.abbreviation());
    }
}

fn run_cases(submatches: &ArgMatches) {
    let registry = Registry::initialize(&registry_config(submatches));
    let object_type = submatches
        .get_one::<ObjectType>("type")
        .copied();
    let limit = submatches
        .get_one::<usize>("limit")
        .copied();

    let mut cases = registry.test_cases(object_type);
    if let Some(limit) = limit {
        cases.truncate(limit);
    }

    let result = if submatches.get_flag("markdown") {
        templating::fill(&Catalogue, &cases)
    } else {
        Output::choose(submatches).list(&cases)
    };

    match result {
        Ok(text) => print!("{}", text),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("mathobject")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Complete and describe configurable math objects.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase logging verbosity. May be repeated."),
        )
        .subcommand(
            Command::new("describe")
                .about("Describe each math object in the given file")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(value_parser!(InterfaceMode))
                        .help("Describe as the simple or complex interface would. Inferred from each object if not given."),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Index of the first coefficient."),
                )
                .arg(raw_control_chars())
                .arg(
                    Arg::new("latex")
                        .long("latex")
                        .action(ArgAction::SetTrue)
                        .help("Emit LaTeX markup instead of plain or highlighted text."),
                )
                .arg(filename()),
        )
        .subcommand(
            Command::new("instantiate")
                .about("Generate a numeric instance of each math object in the given file")
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(value_parser!(InterfaceMode))
                        .help("Arrange relations as the simple or complex interface would. Inferred from each object if not given."),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for the random values, making the output reproducible."),
                )
                .arg(raw_control_chars())
                .arg(
                    Arg::new("latex")
                        .long("latex")
                        .action(ArgAction::SetTrue)
                        .help("Emit LaTeX markup instead of plain or highlighted text."),
                )
                .arg(filename()),
        )
        .subcommand(
            Command::new("merge")
                .about("Complete the settings in the given file against the defaults")
                .arg(raw_control_chars())
                .arg(
                    Arg::new("latex")
                        .long("latex")
                        .action(ArgAction::SetTrue)
                        .hide(true),
                )
                .arg(filename()),
        )
        .subcommand(
            Command::new("types")
                .about("List the object types available for test generation")
                .arg(disable()),
        )
        .subcommand(
            Command::new("cases")
                .about("List generated test cases")
                .arg(
                    Arg::new("type")
                        .value_parser(value_parser!(ObjectType))
                        .help("Only list cases of this object type."),
                )
                .arg(disable())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("List at most this many cases."),
                )
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .action(ArgAction::SetTrue)
                        .help("Write a Markdown catalogue instead of a listing."),
                )
                .arg(raw_control_chars())
                .arg(
                    Arg::new("latex")
                        .long("latex")
                        .action(ArgAction::SetTrue)
                        .hide(true),
                ),
        )
        .get_matches();

    setup_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("describe", submatches)) => run_describe(submatches),
        Some(("instantiate", submatches)) => run_instantiate(submatches),
        Some(("merge", submatches)) => run_merge(submatches),
        Some(("types", submatches)) => run_types(submatches),
        Some(("cases", submatches)) => run_cases(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: mathobject [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}
