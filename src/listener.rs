use crate::synchronizer::StateSynchronizer;
use futures::StreamExt;
use log::{debug, error, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio_tungstenite::{connect_async, tungstenite::Message};

/// PushListener owns the persistent WebSocket connection to the backend and
/// forwards every inbound snapshot frame to the synchronizer in arrival
/// order. The channel carries only server-to-client traffic.
///
/// The connection is opened once at session start. If it closes or errors,
/// the listener logs the event and stops; the displayed state silently
/// freezes and the backend remains the source of truth.
pub struct PushListener {
    /// WebSocket URL, e.g. "ws://localhost:3333/ws"
    url: String,

    /// Synchronizer receiving the inbound frames
    synchronizer: Arc<StateSynchronizer>,

    /// Running flag to control the listener thread
    running: Arc<AtomicBool>,

    /// Thread handle for the listener
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl PushListener {
    /// Create a new push listener
    ///
    /// # Arguments
    /// * `url` - WebSocket URL of the push channel
    /// * `synchronizer` - Synchronizer that will receive the frames
    pub fn new(url: &str, synchronizer: Arc<StateSynchronizer>) -> Self {
        Self {
            url: url.to_string(),
            synchronizer,
            running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start the listener thread
    pub fn start(&mut self) {
        if self.running.load(Ordering::SeqCst) {
            debug!("PushListener already running");
            return;
        }

        self.running.store(true, Ordering::SeqCst);
        let url = self.url.clone();
        let synchronizer = self.synchronizer.clone();
        let running = self.running.clone();

        self.thread_handle = Some(thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to create runtime for push listener: {}", e);
                    running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            rt.block_on(Self::connect_and_listen(&url, synchronizer, running.clone()));

            running.store(false, Ordering::SeqCst);
            debug!("PushListener thread exiting");
        }));

        debug!("PushListener started for {}", self.url);
    }

    /// Connect to the push channel and process frames until it closes or the
    /// running flag is cleared
    async fn connect_and_listen(
        url: &str,
        synchronizer: Arc<StateSynchronizer>,
        running: Arc<AtomicBool>,
    ) {
        let (ws_stream, _) = match connect_async(url).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("Failed to connect to push channel at {}: {}", url, e);
                return;
            }
        };

        debug!("Connected to push channel at {}", url);

        // This client never sends; only the read half is used
        let (_, mut ws_rx) = ws_stream.split();

        // Periodic tick so the running flag is honored even while the
        // channel is idle
        let mut check = tokio::time::interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                _ = check.tick() => {
                    if !running.load(Ordering::SeqCst) {
                        debug!("PushListener stopping");
                        break;
                    }
                }
                message = ws_rx.next() => {
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            synchronizer.handle_message(&text);
                        }
                        Some(Ok(Message::Close(_))) => {
                            warn!("Push channel closed by server");
                            break;
                        }
                        Some(Ok(other)) => {
                            trace!("Ignoring non-text frame: {:?}", other);
                        }
                        Some(Err(e)) => {
                            error!("Push channel error: {}", e);
                            break;
                        }
                        None => {
                            warn!("Push channel stream ended");
                            break;
                        }
                    }
                }
            }
        }

        warn!("Push channel disconnected, state updates stopped");
    }

    /// Stop the listener thread
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        debug!("Stopping PushListener");

        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                error!("Error joining PushListener thread: {:?}", e);
            }
        }

        debug!("PushListener stopped");
    }
}

impl Drop for PushListener {
    fn drop(&mut self) {
        self.stop();
    }
}
