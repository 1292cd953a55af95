//! Melakarta — command-line entry point.

use std::fs::{self, File};
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use melakarta::config::{self, Config};
use melakarta::session::Session;
use melakarta::theory::{spell_all, Catalog, Family, Key, Melakarta, Swara, Toggle};
use melakarta::tone::{self, SpeakerPlayer, TonePlayer, WavPlayer};
use melakarta::tui::App;

const DEFAULT_FILTER: &str = "melakarta=info";

/// Logging is controlled with RUST_LOG. If it is not set, melakarta logs at
/// info level. The interactive wizard logs to ~/.melakarta/melakarta.log.
#[derive(Parser)]
#[command(version, about, long_about = None, verbatim_doc_comment)]
struct Cli {
    /// Config file (default: ~/.melakarta/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive wizard: pick a key, pick swaras, see the melakarta (default)
    Tui {
        /// Key to start on, e.g. C, F#, Bb
        #[arg(long)]
        key: Option<Key>,
    },
    /// List the twelve keys with their semitones
    Keys,
    /// Show every swara spelled under a key
    Swaras {
        #[arg(long, default_value = "C")]
        key: Key,
    },
    /// List all 72 melakartas
    Catalog {
        /// Also spell each arohanam under this key
        #[arg(long)]
        key: Option<Key>,
        #[arg(long)]
        json: bool,
    },
    /// Find the melakarta for a choice of R, G, M, D and N
    Find {
        #[arg(long, default_value = "C")]
        key: Key,
        /// R1, R2 or R3
        ri: Swara,
        /// G1, G2 or G3
        ga: Swara,
        /// M1 or M2
        ma: Swara,
        /// D1, D2 or D3
        dha: Swara,
        /// N1, N2 or N3
        ni: Swara,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show one melakarta by number or name
    Show {
        /// Ordinal (1-72) or name, e.g. 29 or Dheerashankarabharanam
        query: String,
        #[arg(long, default_value = "C")]
        key: Key,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Play arohanam then avarohanam on the default output device
    #[arg(long)]
    play: bool,
    /// Write arohanam then avarohanam to a WAV file
    #[arg(long)]
    wav: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

/// JSON form of one catalog entry.
#[derive(Serialize)]
struct EntryJson<'a> {
    ordinal: u8,
    name: &'a str,
    chakra: &'a str,
    chakra_number: u8,
    arohanam: Vec<&'static str>,
    avarohanam: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<Key>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arohanam_notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avarohanam_notes: Option<Vec<String>>,
}

impl<'a> EntryJson<'a> {
    fn new(entry: &'a Melakarta, key: Option<Key>) -> Self {
        let aro = entry.arohanam();
        let ava = entry.avarohanam();
        Self {
            ordinal: entry.ordinal,
            name: entry.name,
            chakra: entry.chakra(),
            chakra_number: entry.chakra_number(),
            arohanam: aro.iter().map(|s| s.token()).collect(),
            avarohanam: ava.iter().map(|s| s.token()).collect(),
            key,
            arohanam_notes: key.map(|k| spellings(k, &aro)),
            avarohanam_notes: key.map(|k| spellings(k, &ava)),
        }
    }
}

fn spellings(key: Key, swaras: &[Swara]) -> Vec<String> {
    spell_all(key, swaras).iter().map(|n| n.spelling()).collect()
}

fn init_logging(to_file: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    if to_file {
        let dir = config::config_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join("melakarta.log");
        let file = File::options()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(Config::load()),
    }
}

fn print_entry(entry: &Melakarta, key: Key) {
    let aro = entry.arohanam();
    let ava = entry.avarohanam();
    println!("#{} {}", entry.ordinal, entry.name);
    println!("chakra {}: {}", entry.chakra_number(), entry.chakra());
    println!("key: {key}");
    println!("arohanam:   {}", entry.arohanam_text());
    println!("            {}", spellings(key, &aro).join(" "));
    println!("avarohanam: {}", entry.avarohanam_text());
    println!("            {}", spellings(key, &ava).join(" "));
}

/// Sound or export arohanam followed by avarohanam.
fn output_audio(
    entry: &Melakarta,
    key: Key,
    config: &Config,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    if !output.play && output.wav.is_none() {
        return Ok(());
    }
    let mut swaras = entry.arohanam().to_vec();
    swaras.extend(entry.avarohanam());
    let freqs = tone::frequencies(config.reference_hz, key, &swaras);

    if let Some(path) = &output.wav {
        WavPlayer::new(path, config)
            .write_sequence(&freqs, config.note_seconds)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    if output.play {
        let mut player = SpeakerPlayer::open(config).context("opening audio output")?;
        player.play_sequence(&freqs, config.note_seconds);
        // Let the queue drain before the stream is dropped.
        let total = config.note_seconds * freqs.len() as f64 + 0.5;
        thread::sleep(Duration::from_secs_f64(total));
    }
    Ok(())
}

fn run_tui(catalog: Catalog, mut config: Config, key: Option<Key>) -> anyhow::Result<()> {
    if let Some(key) = key {
        config.default_key = key;
    }
    let player = tone::default_player(&config);
    let mut app = App::new(catalog, config, player);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result.context("terminal error")
}

fn find(catalog: &Catalog, key: Key, tokens: [Swara; 5]) -> anyhow::Result<&Melakarta> {
    let mut session = Session::new(key);
    for (family, swara) in Family::MOVABLE.into_iter().zip(tokens) {
        if swara.family() != family {
            bail!("expected a {} variant, got {swara}", family.label());
        }
        match session.toggle(swara)? {
            Toggle::Selected { .. } => {}
            other => bail!("{swara} was not selected ({other:?})"),
        }
    }
    match session.matched(catalog)? {
        Some(entry) => Ok(entry),
        None => bail!("selection is incomplete"),
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { key: None });
    init_logging(matches!(command, Commands::Tui { .. }))?;

    let config = load_config(cli.config.as_ref())?;
    let catalog = Catalog::build().context("melakarta table is inconsistent")?;

    match command {
        Commands::Tui { key } => run_tui(catalog, config, key),
        Commands::Keys => {
            for key in Key::ALL {
                println!("{:<3} {:>2}", key.name(), key.semitone());
            }
            Ok(())
        }
        Commands::Swaras { key } => {
            let session = Session::new(key);
            for row in session.rows() {
                println!(
                    "{:<3} {:<15} {:<5} {:>2}",
                    row.swara.token(),
                    row.interval,
                    row.note.spelling(),
                    row.note.semitone
                );
            }
            Ok(())
        }
        Commands::Catalog { key, json } => {
            if json {
                let entries: Vec<EntryJson> = catalog
                    .entries()
                    .iter()
                    .map(|e| EntryJson::new(e, key))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            for entry in catalog.entries() {
                print!(
                    "{:>2} {:<24} {:<7} {}",
                    entry.ordinal,
                    entry.name,
                    entry.chakra(),
                    entry.arohanam_text()
                );
                match key {
                    Some(k) => println!("   {}", spellings(k, &entry.arohanam()).join(" ")),
                    None => println!(),
                }
            }
            Ok(())
        }
        Commands::Find {
            key,
            ri,
            ga,
            ma,
            dha,
            ni,
            output,
        } => {
            let entry = find(&catalog, key, [ri, ga, ma, dha, ni])?;
            info!(ordinal = entry.ordinal, name = entry.name, "melakarta matched");
            if output.json {
                println!("{}", serde_json::to_string_pretty(&EntryJson::new(entry, Some(key)))?);
            } else {
                print_entry(entry, key);
            }
            output_audio(entry, key, &config, &output)
        }
        Commands::Show { query, key, output } => {
            let Some(entry) = catalog.lookup(&query) else {
                bail!("no melakarta named or numbered {query:?}");
            };
            if output.json {
                println!("{}", serde_json::to_string_pretty(&EntryJson::new(entry, Some(key)))?);
            } else {
                print_entry(entry, key);
            }
            output_audio(entry, key, &config, &output)
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(2);
    }
}
