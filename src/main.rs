#![warn(clippy::all, clippy::pedantic)]
use reverso::{
    AppendLetterCommand, CapitalizeAtCommand, Config, DeleteFromEndCommand,
    DeleteFromStartCommand, HistoryManager, LowerCaseAtCommand, TitleCaseCommand,
};

use std::env;
use std::path::Path;
use std::process;
use termion::{color, style};
use tracing_subscriber::EnvFilter;

/// Index used by the capitalize and lower-case scenarios.
const CASE_INDEX: usize = 5;

fn heading(number: usize, title: &str) {
    println!(
        "{}{}Test case {}: {}{}{}",
        style::Bold,
        color::Fg(color::Green),
        number,
        title,
        color::Fg(color::Reset),
        style::Reset
    );
}

fn show(step: &str, manager: &HistoryManager) {
    println!("  {:<8} {}", step, manager.text());
}

/// Does, undoes and redoes one command, printing the text after each step.
fn scenario<F>(
    manager: &mut HistoryManager,
    number: usize,
    title: &str,
    run: F,
) -> reverso::Result<()>
where
    F: FnOnce(&mut HistoryManager) -> reverso::Result<()>,
{
    heading(number, title);
    show("current", manager);
    run(manager)?;
    show("do", manager);
    manager.undo()?;
    show("undo", manager);
    manager.redo()?;
    show("redo", manager);
    println!();
    Ok(())
}

fn run(manager: &mut HistoryManager) -> reverso::Result<()> {
    scenario(manager, 1, "AppendLetterCommand", |m| {
        m.do_command(AppendLetterCommand::from('g'))
    })?;
    scenario(manager, 2, "DeleteFromStartCommand", |m| {
        let command = DeleteFromStartCommand::new(m.text())?;
        m.do_command(command)
    })?;
    scenario(manager, 3, "DeleteFromEndCommand", |m| {
        let command = DeleteFromEndCommand::new(m.text())?;
        m.do_command(command)
    })?;
    scenario(manager, 4, "CapitalizeAtCommand", |m| {
        m.do_command(CapitalizeAtCommand::new(CASE_INDEX))
    })?;
    scenario(manager, 5, "LowerCaseAtCommand", |m| {
        m.do_command(LowerCaseAtCommand::new(CASE_INDEX))
    })?;
    scenario(manager, 6, "TitleCaseCommand", |m| {
        m.do_command(TitleCaseCommand::new())
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("ERR: {error}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut manager = HistoryManager::from_config(&config);
    if let Err(error) = run(&mut manager) {
        eprintln!("ERR: {error}");
        process::exit(1);
    }
}
