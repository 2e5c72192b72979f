//! Todo Session - Command-line front end
//!
//! Each invocation restores the session from the state file, dispatches one
//! intent, prints both sections and saves the session back. The actual
//! implementation is in the `todo_session` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use todo_session::{Session, Storage, TaskId, logging, render_views};

/// Todo Session - a single task list that survives between invocations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the session state file
    file: String,

    /// Log level or filter directive (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type TEXT into the input field and submit it
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Type TEXT into the input field without submitting
    Input {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Submit whatever is in the input field
    Submit,
    /// Flip a task between Items and Completed Items
    Toggle { id: TaskId },
    /// Remove a task
    Delete { id: TaskId },
    /// Show both sections
    List,
    /// Print the encoded task entries, one per line
    Export,
    /// Discard the saved session
    Reset,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init(&args.log_level)?;

    let storage = Storage::new(&args.file);
    if let Command::Reset = args.command {
        storage.clear()?;
        println!("Session cleared");
        return Ok(());
    }

    let mut session = Session::restore(storage.load_or_empty());
    let mut rejected = false;

    match args.command {
        Command::Add { text } => rejected = session.on_add_intent_with(text.join(" ")).is_err(),
        Command::Input { text } => session.set_input(text.join(" ")),
        Command::Submit => rejected = session.on_add_intent().is_err(),
        Command::Toggle { id } => session.on_toggle_intent(id),
        Command::Delete { id } => session.on_delete_intent(id),
        Command::List | Command::Reset => {}
        Command::Export => {
            for entry in session.store().serialize() {
                println!("{}", entry);
            }
            return Ok(());
        }
    }

    if let Some(notice) = session.notice() {
        eprintln!("{}", notice);
    }
    print!("{}", render_views(session.store().snapshot()));
    if !session.input().is_empty() {
        println!("\nInput: {}", session.input());
    }

    storage.save(&session.save_state())?;

    if rejected {
        std::process::exit(1);
    }
    Ok(())
}
