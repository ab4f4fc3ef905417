mod commands;

use console::style;

fn main() {
    if let Err(err) = run() {
        eprintln!(
            "{} {:?}",
            style("An uncaught exception has occurred.").red(),
            err
        );
        std::process::exit(1);
    }
}

fn run() -> eyre::Result<()> {
    color_eyre::install()?;

    commands::run()
}
