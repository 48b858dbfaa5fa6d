use std::path::PathBuf;

use clap::Parser;
use log::info;

use pda_cfg_rs::data;
use pda_cfg_rs::dot::DotConfig;

/// Writes one Graphviz file per language example's PDA.
///
/// Render the output with e.g. `dot -Tpng pda-L1.dot -o pda-L1.png`, or
/// `neato -n` when positions are requested.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Output directory.
    #[arg(value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Emit the authored diagram positions as pos hints (for neato -n).
    #[clap(long)]
    positions: bool,

    /// Highlight the start state of each automaton.
    #[clap(long)]
    highlight_start: bool,
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
    let config = DotConfig {
        use_positions: args.positions,
        ..DotConfig::default()
    };

    std::fs::create_dir_all(&args.out_dir)?;

    for lang in data::languages() {
        let current = args.highlight_start.then(|| lang.pda.start_state.clone());
        let dot = lang.pda.to_dot_with_config(&config, current.as_deref())?;

        let path = args.out_dir.join(format!("pda-{}.dot", lang.id));
        std::fs::write(&path, dot)?;
        info!("{} -> {}", lang.name, path.display());
    }

    Ok(())
}
