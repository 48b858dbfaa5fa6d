use clap::Parser;
use color_eyre::eyre::eyre;

use pda_cfg_rs::data;
use pda_cfg_rs::render;
use pda_cfg_rs::session::Session;
use pda_cfg_rs::step::Scripted;
use pda_cfg_rs::types::{LanguageId, Mode};

/// Plays every correct answer through both tracks of a language example,
/// printing each configuration and derivation line.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Language example to walk through (1..=5).
    #[arg(value_name = "ID", default_value = "1")]
    language: u32,

    /// Walk through all language examples in order.
    #[clap(long)]
    all: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    if args.all {
        for language in data::languages() {
            walk(Session::new(language));
        }
    } else {
        let language = data::find(LanguageId::new(args.language))
            .ok_or_else(|| eyre!("no language example with id {}", args.language))?;
        walk(Session::new(language));
    }

    Ok(())
}

fn walk(mut session: Session) {
    let lang = session.language().clone();
    println!();
    println!("=== {} ===", lang.name);
    println!("{}", lang.description);
    println!("Test string: {}", render::format_input(&lang.test_string));

    println!();
    println!("--- PDA run ---");
    for step in &lang.pda_steps {
        println!("{}  {}", render::format_configuration(step), step.description);
    }

    println!();
    println!("--- CFG derivation ---");
    println!("{}", render::production_table(&lang.cfg).trim_end());
    for step in &lang.cfg_steps {
        println!("{}  {}", render::format_derivation(&lang.cfg, &step.current), step.description);
    }

    println!();
    println!("--- replaying answers ---");
    loop {
        let Some(choice) = session.current_step().and_then(|s| s.correct_answer()) else {
            if session.auto_switch().is_none() {
                break;
            }
            println!("(switching to {} mode)", session.mode());
            continue;
        };
        let feedback = session.answer(choice).expect("step exists");
        println!("[{}] {}", session.mode(), feedback.message);
    }

    let summary = session.summary();
    println!(
        "PDA {}/{}  CFG {}/{}  overall {}%",
        summary.pda.completed, summary.pda.total, summary.cfg.completed, summary.cfg.total, summary.progress
    );
}
