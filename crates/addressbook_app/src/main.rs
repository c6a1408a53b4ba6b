mod effects;
mod repl;

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use addressbook_core::{update, AppState, AppViewModel, Msg};
use addressbook_lookup::LookupSettings;
use book_logging::book_error;

use crate::effects::EffectRunner;
use crate::repl::Command;

/// Events driving the single logical thread of control.
enum AppEvent {
    Line(String),
    Core(Msg),
    StdinClosed,
}

fn main() {
    book_logging::initialize_terminal(log::LevelFilter::Warn);

    let (event_tx, event_rx) = mpsc::channel();
    let (msg_tx, msg_rx) = mpsc::channel();

    // Forward lookup completions into the one event queue.
    let core_tx = event_tx.clone();
    thread::spawn(move || {
        while let Ok(msg) = msg_rx.recv() {
            if core_tx.send(AppEvent::Core(msg)).is_err() {
                break;
            }
        }
    });

    let runner = match EffectRunner::new(msg_tx, lookup_settings_from_env()) {
        Ok(runner) => runner,
        Err(err) => {
            book_error!("could not start the lookup client: {err}");
            std::process::exit(1);
        }
    };

    spawn_stdin_reader(event_tx);

    print_help();
    let mut state = AppState::new();
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Line(line) => match repl::parse_line(&line) {
                Ok(Command::Messages(msgs)) => {
                    for msg in msgs {
                        state = dispatch(state, msg, &runner);
                    }
                    render(&state.view());
                }
                Ok(Command::Show) => render(&state.view()),
                Ok(Command::Help) => print_help(),
                Ok(Command::Quit) => break,
                Err(message) => println!("{message}"),
            },
            AppEvent::Core(msg) => {
                state = dispatch(state, msg, &runner);
                render(&state.view());
            }
            AppEvent::StdinClosed => break,
        }
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (next, effects) = update(state, msg);
    runner.run(effects);
    next
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::StdinClosed);
    });
}

fn lookup_settings_from_env() -> LookupSettings {
    let mut settings = LookupSettings::default();
    if let Ok(base_url) = std::env::var("ADDRESSBOOK_API_URL") {
        if !base_url.is_empty() {
            settings.base_url = base_url;
        }
    }
    settings
}

fn render(view: &AppViewModel) {
    if view.searching {
        println!("Searching...");
    }
    if let Some(error) = &view.error {
        println!("! {error}");
    }
    if !view.candidates.is_empty() {
        println!("Candidates:");
        for candidate in &view.candidates {
            let marker = if candidate.id == view.selected_address {
                "*"
            } else {
                " "
            };
            println!(
                " {marker} [{}] {} {}, {} {}",
                candidate.id,
                candidate.street,
                candidate.house_number,
                candidate.postcode,
                candidate.city
            );
        }
    }
    println!("Address book ({} entries):", view.book_entries.len());
    for entry in &view.book_entries {
        println!(
            "  [{}] {} {}: {} {}, {} {}",
            entry.id,
            entry.first_name,
            entry.last_name,
            entry.street,
            entry.house_number,
            entry.postcode,
            entry.city
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <postcode> <housenumber>   find addresses");
    println!("  select <id>                       mark a candidate");
    println!("  add <first> <last>                add the selection to the book");
    println!("  remove <id>                       remove a stored entry");
    println!("  clear                             clear all fields");
    println!("  show | help | quit");
}
