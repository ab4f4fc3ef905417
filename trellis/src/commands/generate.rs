use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use eyre::{Result, eyre};
use trellis_core::{WriteMode, WriteOptions, logger};
use trellis_generators::{
    ArgValues, Error, GenerateOptions, GeneratorKind, OptionSpec, fetch_by_key,
};

use super::UnwrapOrExit;

/// Build the `generate` subcommand. When a valid template key was seen on
/// argv, that kind's options are appended so they parse and appear in
/// `--help`.
pub(crate) fn command(template_hint: Option<&str>) -> Command {
    let mut command = Command::new("generate")
        .visible_alias("g")
        .about("Generate a component")
        .arg(
            Arg::new("template")
                .required(true)
                .help("The component kind to generate"),
        )
        .arg(
            Arg::new("name")
                .required(true)
                .help("The name of the generated component"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("The location to generate the component files"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .conflicts_with("skip")
                .help("Overwrite files if a conflict exists on generation"),
        )
        .arg(
            Arg::new("skip")
                .short('s')
                .long("skip")
                .action(ArgAction::SetTrue)
                .help("Skip files if a conflict exists on generation"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print output instead of writing to file"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress informational output"),
        );

    if let Some(kind) = template_hint.and_then(fetch_by_key) {
        for option in kind.options {
            command = command.arg(option_to_arg(option));
        }
    }
    command
}

fn option_to_arg(option: &OptionSpec) -> Arg {
    let mut arg = Arg::new(option.name)
        .long(option.name)
        .help(option.description)
        .help_heading(option.group);
    if option.multiple {
        arg = arg.num_args(1..).action(ArgAction::Append);
    }
    arg
}

pub(crate) fn run(matches: &ArgMatches) -> Result<()> {
    logger::set_quiet(matches.get_flag("quiet"));

    let template = matches
        .get_one::<String>("template")
        .ok_or_else(|| eyre!("missing <template>"))?;
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| eyre!("missing <name>"))?;

    let kind = fetch_by_key(template)
        .ok_or_else(|| Error::UnknownTemplate {
            key: template.clone(),
        })
        .unwrap_or_exit();

    let mut generator = kind.create(name);
    generator
        .build_metadata(&generator_args(kind, matches))
        .unwrap_or_exit();

    generator.generate(&GenerateOptions {
        output_dir: matches.get_one::<PathBuf>("output-dir").cloned(),
        write: WriteOptions {
            mode: write_mode(matches),
            dry_run: matches.get_flag("dry-run"),
        },
    })
}

/// Collect the values of the kind's own options from the parsed matches.
fn generator_args(kind: &GeneratorKind, matches: &ArgMatches) -> ArgValues {
    let mut args = ArgValues::new();
    for option in kind.options {
        if let Some(values) = matches.get_many::<String>(option.name) {
            args.insert(option.name.to_string(), values.cloned().collect());
        }
    }
    args
}

/// Prompt is the documented default when neither flag is given; clap
/// already rejected the case where both are set.
fn write_mode(matches: &ArgMatches) -> WriteMode {
    if matches.get_flag("force") {
        WriteMode::Force
    } else if matches.get_flag("skip") {
        WriteMode::Skip
    } else {
        WriteMode::Prompt
    }
}
