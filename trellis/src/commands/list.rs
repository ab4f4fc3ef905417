use clap::Command;
use eyre::Result;
use trellis_generators::GENERATORS;

pub(crate) fn command() -> Command {
    Command::new("list").about("List the registered template kinds")
}

pub(crate) fn run() -> Result<()> {
    println!("Templates:");
    for kind in GENERATORS {
        println!("  {} - {}", kind.key, kind.description);
        for option in kind.options {
            let value_hint = if option.multiple {
                "<values>..."
            } else {
                "<value>"
            };
            println!("    --{} {}  {}", option.name, value_hint, option.description);
        }
    }
    Ok(())
}
