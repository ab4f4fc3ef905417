mod generate;
mod list;

use clap::{ArgMatches, Command};
use eyre::Result;

/// Extension trait for exiting on configuration errors with pretty
/// diagnostic formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trellis_generators::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

pub fn run() -> Result<()> {
    let matches = build_cli(template_hint().as_deref()).get_matches();
    dispatch(&matches)
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("generate", matches)) => generate::run(matches),
        Some(("list", _)) => list::run(),
        _ => unreachable!("a subcommand is required"),
    }
}

/// Peek at argv for the template key before full parsing so the selected
/// kind's options participate in parsing and show up in `--help`.
fn template_hint() -> Option<String> {
    let mut args = std::env::args().skip(1);
    match args.next()?.as_str() {
        "generate" | "g" => args.next().filter(|arg| !arg.starts_with('-')),
        _ => None,
    }
}

pub(crate) fn build_cli(template_hint: Option<&str>) -> Command {
    Command::new("trellis")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate component source files from templates")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate::command(template_hint))
        .subcommand(list::command())
}
