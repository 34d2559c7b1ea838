use std::io::{stdout, IsTerminal};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::debug;
use struggle_cli::cli_args::Args;
use struggle_cli::commands::{exit_status, run_all, Session, EXITING_MESSAGE};
use struggle_cli::presentation::{Presenter, TerminalPresenter};
use struggle_cli::prompts::TerminalPrompter;
use struggle_core::config::Config;
use struggle_core::error::Result;
use struggle_core::store::CsvStore;

fn execute(args: &Args) -> Result<()> {
    let color = !args.no_color && stdout().is_terminal();
    let config = Config::new(&args.file, color);
    debug!("Applications file: `{}`", config.store_path);

    let mut store = CsvStore::new(config.store_path.clone());
    let mut prompter = TerminalPrompter;
    let mut presenter = TerminalPresenter::new(&config);
    presenter.title()?;

    let mut session = Session {
        store: &mut store,
        prompter: &mut prompter,
        presenter: &mut presenter,
    };

    run_all(&mut session, &args.actions())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    if !args.has_actions() {
        if let Err(e) = Args::command().print_help() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let result = execute(&args);
    match &result {
        Err(e) if e.is_user_stop() => println!("{EXITING_MESSAGE}"),
        Err(e) => eprintln!("{e}"),
        Ok(()) => {}
    }

    ExitCode::from(exit_status(&result))
}
