use audioremote::config::ServerConfig;
use audioremote::dispatcher::CommandDispatcher;
use audioremote::helpers::http_client::default_http_client;
use audioremote::listener::PushListener;
use audioremote::render::ConsoleRenderer;
use audioremote::synchronizer::{StateListener, StateSynchronizer};
use clap::Parser;
use log::info;
use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Remote control client for a networked audio player", long_about = None)]
struct Args {
    /// Hostname or IP address of the player backend
    #[clap(long, default_value = "localhost")]
    host: String,

    /// HTTP port of the player backend
    #[clap(long, default_value_t = 3333)]
    port: u16,

    /// Log level filter (error, warn, info, debug, trace)
    #[clap(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    audioremote::logging::init(Some(&args.log_level));

    info!("audioremote starting");

    let config = ServerConfig::new(&args.host, args.port);
    let dispatcher = Arc::new(CommandDispatcher::new(&config.http_base()));
    let synchronizer = Arc::new(StateSynchronizer::new());

    // The console renderer replaces its output on every accepted snapshot
    let renderer = Arc::new(ConsoleRenderer::new());
    let weak_renderer = Arc::downgrade(&renderer) as Weak<dyn StateListener>;
    synchronizer.register_listener(weak_renderer);

    // One-shot pull of the initial snapshot; a failure here just means the
    // view stays empty until the first push arrives
    let http = default_http_client();
    synchronizer.initialize(http.as_ref(), &config.http_base());

    let mut listener = PushListener::new(&config.ws_url(), synchronizer.clone());
    listener.start();

    // Set up a shared flag for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        println!("\nReceived Ctrl+C, shutting down...");
        r.store(false, Ordering::SeqCst);
    }) {
        log::warn!("Failed to set Ctrl+C handler: {}", e);
    }

    println!("Connected to {}. Keyboard controls:", config.http_base());
    println!("  Space: Play");
    println!("  n: Next track");
    println!("  p: Previous track");
    println!("  s: Stop");
    println!("  a: All songs playlist");
    println!("  l: Configured playlist");
    println!("  Ctrl+C: Exit");

    // Keyboard thread translating keystrokes into dispatched commands
    let keyboard_running = running.clone();
    let keyboard_dispatcher = dispatcher.clone();
    thread::spawn(move || {
        let mut stdin = io::stdin();
        let mut buffer = [0; 1];

        while keyboard_running.load(Ordering::SeqCst) {
            if stdin.read_exact(&mut buffer).is_ok() {
                match buffer[0] {
                    b' ' => keyboard_dispatcher.play(),
                    b'n' | b'N' => keyboard_dispatcher.next(),
                    b'p' | b'P' => keyboard_dispatcher.prev(),
                    b's' | b'S' => keyboard_dispatcher.stop(),
                    b'a' | b'A' => keyboard_dispatcher.select_all_songs(),
                    b'l' | b'L' => keyboard_dispatcher.select_configured_playlist(),
                    _ => {}
                }
            } else {
                thread::sleep(Duration::from_millis(10));
            }
        }

        info!("Keyboard handler thread exiting");
    });

    // Keep the main thread alive until Ctrl+C is received
    while running.load(Ordering::SeqCst) {
        thread::sleep(Duration::from_millis(100));
    }

    listener.stop();
    info!("Exiting application");
}
