use std::process::ExitCode;

use kanji_poster::{cli, logging, runner};

fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}\n\n{}", cli::help_text());
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = logging::init(level) {
        eprintln!("failed to initialize logger: {e}");
    }

    match runner::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
