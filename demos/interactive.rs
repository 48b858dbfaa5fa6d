use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::eyre::eyre;

use pda_cfg_rs::data;
use pda_cfg_rs::progress::SavedProgress;
use pda_cfg_rs::render;
use pda_cfg_rs::session::Session;
use pda_cfg_rs::step::Scripted;
use pda_cfg_rs::types::{LanguageId, Mode};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Language example to start with (1..=5).
    #[arg(value_name = "ID", default_value = "1")]
    language: u32,
}

const HELP: &str = "\
Commands:
  1..9        answer the current step with that choice
  h           show a hint
  p           go back to the previous step
  a           apply the correct choice (auto step)
  t           switch between the PDA and CFG tracks
  c           cycle to the next language
  r           reset the current language
  d           dump the PDA diagram as DOT
  s           show the progress summary
  save FILE   save progress as JSON
  load FILE   load progress from JSON
  ?           show this help
  q           quit";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let language = data::find(LanguageId::new(args.language))
        .ok_or_else(|| eyre!("no language example with id {}", args.language))?;

    let mut session = Session::new(language);
    println!("=== PDA-CFG equivalence, interactive walkthrough ===");
    println!("{}", HELP);
    show_state(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "q" => break,
            "?" => println!("{}", HELP),
            "h" => match session.hint() {
                Some(hint) => println!("Hint: {}", hint),
                None => println!("No hint available"),
            },
            "p" => {
                session.step_back();
                println!("Moved to previous step");
                show_state(&session);
            }
            "a" => {
                let correct = session.current_step().and_then(|s| s.correct_answer());
                match correct {
                    Some(choice) => answer(&mut session, choice),
                    None => println!("No correct choice available"),
                }
            }
            "t" => {
                let mode = session.switch_mode();
                println!("Switched to {} mode", mode);
                show_state(&session);
            }
            "c" => {
                let next = data::next_after(session.language().id);
                println!("Switched to: {}", next.name);
                session.set_language(next);
                show_state(&session);
            }
            "r" => {
                session.reset();
                println!("Simulation reset");
                show_state(&session);
            }
            "d" => print!("{}", session.language().pda.to_dot()?),
            "s" => show_summary(&session),
            _ => {
                if let Some(path) = input.strip_prefix("save ") {
                    save(&session, path.trim());
                } else if let Some(path) = input.strip_prefix("load ") {
                    load(&mut session, path.trim());
                } else if let Ok(n) = input.parse::<usize>() {
                    let count = session.choices().len();
                    if n >= 1 && n <= count {
                        answer(&mut session, n - 1);
                    } else {
                        println!("Choose between 1 and {}", count);
                    }
                } else {
                    println!("Unknown command `{}` (type ? for help)", input);
                }
            }
        }
    }

    show_summary(&session);
    Ok(())
}

fn answer(session: &mut Session, choice: usize) {
    match session.answer(choice) {
        Some(feedback) => {
            println!("{}", feedback.message);
            if feedback.correct {
                if let Some(mode) = session.auto_switch() {
                    println!("{} track complete! Switching to {}...", mode.other(), mode);
                }
                show_state(session);
            }
        }
        None => println!("This track is complete; switch tracks (t) or change language (c)"),
    }
}

fn show_state(session: &Session) {
    let lang = session.language();
    println!();
    println!("--- {} ({} mode) --- {}% done", lang.name, session.mode(), session.progress_percent());
    println!("Test string: {}", render::format_input(&lang.test_string));

    match session.mode() {
        Mode::Pda => {
            if let Some(view) = session.pda_view() {
                println!("State: {}", view.state);
                println!("Remaining input: {}", render::format_input(&view.input));
                println!("Stack (top first): {}", render::format_stack(&view.stack));
                println!("{}", view.description);
            }
        }
        Mode::Cfg => {
            print!("{}", render::production_table(&lang.cfg));
            if let Some(view) = session.cfg_view() {
                println!("Current: {}", render::format_derivation(&lang.cfg, &view.current));
                println!("Target: {}", render::format_input(&view.target));
                println!("{}", view.description);
            }
        }
    }

    let choices = session.choices();
    if choices.is_empty() {
        println!("{} simulation complete! Switch tracks or change language to continue.", session.mode());
    } else {
        println!("Select:");
        print!("{}", render::choice_list(choices));
    }
}

fn show_summary(session: &Session) {
    let summary = session.summary();
    println!();
    println!("Language: {}", summary.language);
    println!("Test string: {}", render::format_input(&summary.test_string));
    println!(
        "PDA: {}/{} ({}%)   CFG: {}/{} ({}%)   overall {}%",
        summary.pda.completed,
        summary.pda.total,
        summary.pda.percentage,
        summary.cfg.completed,
        summary.cfg.total,
        summary.cfg.percentage,
        summary.progress,
    );
    if summary.is_complete {
        println!("Equivalence demonstrated: both tracks processed {}", render::format_input(&summary.test_string));
    }
}

fn save(session: &Session, path: &str) {
    let result = session
        .export_progress()
        .to_json()
        .map_err(color_eyre::eyre::Report::from)
        .and_then(|json| std::fs::write(path, json).map_err(Into::into));
    match result {
        Ok(()) => println!("Progress saved to {}", path),
        Err(e) => println!("Failed to save progress: {}", e),
    }
}

fn load(session: &mut Session, path: &str) {
    let result = std::fs::read_to_string(path)
        .map_err(color_eyre::eyre::Report::from)
        .and_then(|json| SavedProgress::from_json(&json).map_err(Into::into))
        .and_then(|saved| session.import_progress(&saved).map_err(Into::into));
    match result {
        Ok(()) => {
            println!("Progress loaded from {}", path);
            show_state(session);
        }
        Err(e) => println!("Failed to load progress: {}", e),
    }
}
