use std::env;
use std::fmt::Write as _;
use std::net::TcpStream;
use std::path::Path;
use std::process;

use anyhow::Context;

use realm_client::network::OutboundQueue;
use realm_client::script::{build_commands, load_script};
use realm_client::settings::{ClientSettings, default_settings_path};

const USAGE: &str = "usage: realm-client <script.json> [--send]";

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

fn run(script_path: &Path, send: bool) -> anyhow::Result<()> {
    let settings_path = default_settings_path();
    // Settings problems are logged once the logger exists.
    let (settings, load_error) = match ClientSettings::load(&settings_path) {
        Ok(settings) => (settings, None),
        Err(e) => (ClientSettings::default(), Some(e)),
    };

    realm_core::initialize_logger(settings.log_level_filter(), settings.log_file.as_deref())
        .context("failed to initialize logger")?;
    log::info!("Using settings path: {}", settings_path.display());
    if let Some(e) = load_error {
        log::warn!("{:#}, using defaults", e);
    }
    if settings.log_level.parse::<log::LevelFilter>().is_err() {
        log::warn!("Unknown log level {:?}, using info", settings.log_level);
    }

    let entries = load_script(script_path)?;
    let commands = build_commands(&entries, settings.client_version)?;

    let mut queue = OutboundQueue::new();
    for command in &commands {
        queue
            .push(command)
            .with_context(|| format!("failed to frame {command}"))?;
        let frame = command.to_bytes()?;
        println!("{command}");
        println!("    {}", hex(&frame));
    }

    println!(
        "{} frames, {} bytes",
        queue.pending_frames(),
        queue.pending_bytes()
    );

    if send {
        let address = settings.server_address();
        log::info!("Connecting to {}", address);
        let mut stream = TcpStream::connect(&address)
            .with_context(|| format!("failed to connect to {address}"))?;
        let written = queue
            .flush_to(&mut stream)
            .with_context(|| format!("failed to send frames to {address}"))?;
        log::info!("Sent {} bytes to {}", written, address);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (script, send) = match args.as_slice() {
        [_, script] => (script, false),
        [_, script, flag] if flag == "--send" => (script, true),
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(Path::new(script), send) {
        log::error!("{:#}", e);
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
