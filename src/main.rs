//! `gyrocam-replay`: play a TOML script of input events through a
//! controller and print the camera state after every frame as JSON lines.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gyrocam::replay::ReplayScript;
use gyrocam::Options;

#[derive(Parser, Debug)]
#[command(name = "gyrocam-replay")]
#[command(about = "Replay scripted sensor and gesture input", long_about = None)]
struct Cli {
    /// Replay script (TOML).
    script: PathBuf,

    /// Options preset (TOML). Defaults are used when omitted.
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = match &cli.options {
        Some(path) => {
            let options = Options::load(path).with_context(|| {
                format!("loading options from {}", path.display())
            })?;
            log::info!("loaded options preset {}", path.display());
            options
        }
        None => Options::default(),
    };

    let script = ReplayScript::load(&cli.script).with_context(|| {
        format!("loading replay script {}", cli.script.display())
    })?;
    log::info!(
        "replaying {} frames at {}x{}",
        script.frames.len(),
        script.width,
        script.height
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for state in script.run(options) {
        serde_json::to_writer(&mut out, &state)?;
        writeln!(out)?;
    }
    Ok(())
}
