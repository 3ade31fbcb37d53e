extern crate clap;
extern crate colored;
extern crate log;
extern crate tokio;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use colored::*;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

mod banner;
use crate::banner::print_banner;

use clap::{Parser, Subcommand};

use queuewatch_viewer::client::{HttpQueueClient, QueueSource};
use queuewatch_viewer::models::queue::Song;
use queuewatch_viewer::page::HtmlFilePage;
use queuewatch_viewer::render::format_duration;
use queuewatch_viewer::{QueueViewer, ServerId};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a server ID to its queue page URL
    Open(OpenArgs),
    /// Fetch the queue once and print it to the terminal
    Peek(PeekArgs),
    /// Poll the queue and keep an HTML snapshot up to date
    Watch(WatchArgs),
}

#[derive(Parser)]
struct OpenArgs {
    #[clap(help = "Numeric server ID (prompted for when omitted)")]
    server_id: Option<String>,
}

#[derive(Parser)]
struct PeekArgs {
    #[clap(help = "Numeric server ID", required = true)]
    server_id: String,
}

#[derive(Parser)]
struct WatchArgs {
    #[clap(help = "Numeric server ID", required = true)]
    server_id: String,
    #[clap(long, default_value_t = 5000, help = "Refresh interval in milliseconds")]
    interval_ms: u64,
    #[clap(long, default_value = "queue.html", help = "Snapshot file to rewrite each cycle")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    // make compiler warning quiet; it should be getting set or exiting.
    #[allow(unused_assignments)]
    let mut api_hostname = "http://default-api-hostname.com".to_string();

    // Access the QUEUEWATCH_HOST environment variable
    if let Ok(hostname) = std::env::var("QUEUEWATCH_HOST") {
        api_hostname = hostname;
        info!("[-] queue service base URL: {}", api_hostname);
    } else {
        eprintln!("Error: QUEUEWATCH_HOST environment variable is not set.");
        std::process::exit(1);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Open(args) => {
            let raw = match args.server_id {
                Some(id) => id,
                None => prompt_server_id()?,
            };
            let server_id = parse_server_id_or_exit(&raw);
            println!(
                "{}{}",
                api_hostname.trim_end_matches('/'),
                server_id.queue_path()
            );
        }
        Commands::Peek(args) => {
            print_banner();
            let server_id = parse_server_id_or_exit(&args.server_id);
            debug!("[-] peeking at queue for server {}", server_id);
            peek(&api_hostname, server_id).await;
        }
        Commands::Watch(args) => {
            print_banner();
            let server_id = parse_server_id_or_exit(&args.server_id);
            watch(&api_hostname, server_id, args.interval_ms, args.out).await;
        }
    }

    Ok(())
}

// Both entry paths (argument and prompt) meet in ServerId::from_str; the
// warning text lives on the error variants.
fn parse_server_id_or_exit(raw: &str) -> ServerId {
    match ServerId::from_str(raw) {
        Ok(server_id) => server_id,
        Err(err) => {
            eprintln!("[!] {}", err);
            std::process::exit(1);
        }
    }
}

fn prompt_server_id() -> io::Result<String> {
    print!("server ID: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn requester_line(song: &Song) -> String {
    match &song.requester_name {
        Some(name) => format!("🎤 {}", name),
        None => format!("👤 User: {}", song.requester),
    }
}

async fn peek(api_hostname: &str, server_id: ServerId) {
    let client = HttpQueueClient::new(api_hostname, server_id);

    let data = match client.fetch_queue().await {
        Ok(data) => data,
        Err(err) => {
            eprintln!("[!] Error: {}", err);
            std::process::exit(1);
        }
    };

    if !data.success {
        let message = data.error.unwrap_or_else(|| "unknown error".to_string());
        eprintln!("[!] Error loading queue: {}", message);
        std::process::exit(1);
    }

    if let Some(name) = &data.server_name {
        println!("{}{}", "server: ".green(), name.green().bold());
    }
    println!(
        "{}{}",
        "queue length: ".green(),
        data.queue.len().to_string().green().bold()
    );

    if data.queue.is_empty() {
        println!("  {}", "🎵 The queue is currently empty".yellow());
        return;
    }

    for (index, song) in data.queue.iter().enumerate() {
        let color = if index % 2 == 0 { "cyan" } else { "magenta" };

        let line = format!(
            "{:>3}. {} by {} [⏱️ {}] {}",
            index + 1,
            song.title,
            song.author,
            format_duration(song.duration),
            requester_line(song)
        );
        println!("  {}", line.color(color));
    }
}

async fn watch(api_hostname: &str, server_id: ServerId, interval_ms: u64, out: PathBuf) {
    let heading = format!("Music Queue - Server {}", server_id);
    let client = HttpQueueClient::new(api_hostname, server_id);
    let viewer = QueueViewer::with_interval(client, Duration::from_millis(interval_ms));
    let page = HtmlFilePage::new(&out, &heading);

    println!(
        "{}{}",
        "writing snapshots to: ".green(),
        out.display().to_string().green().bold()
    );
    println!("  {}", "press ctrl-c to stop".yellow());

    // ctrl-c flips the cancellation token; the loop winds down at the next
    // cycle boundary.
    let cancel = viewer.cancel_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("[-] ctrl-c received, shutting down");
                cancel.cancel();
            }
            Err(err) => eprintln!("[!] failed to listen for ctrl-c: {}", err),
        }
    });

    let handle = viewer.start(page);
    let _page = handle.join().await;
    println!("{}", "[-] viewer stopped".yellow());
}
