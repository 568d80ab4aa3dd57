use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::DataSource;
use crate::error::LoadError;
use crate::samples::Sample;

#[derive(Debug)]
pub struct LoadMessage {
    pub generation: u64,
    pub result: Result<Vec<Sample>, LoadError>,
}

/// Owns the background load. At most one task is in flight; starting a new
/// load or dropping the loader aborts it, and its result is never delivered.
#[derive(Debug)]
pub struct SampleLoader {
    source: DataSource,
    client: reqwest::Client,
    generation: u64,
    task: Option<JoinHandle<()>>,
    message_tx: mpsc::UnboundedSender<LoadMessage>,
    message_rx: mpsc::UnboundedReceiver<LoadMessage>,
}

impl SampleLoader {
    pub fn new(source: DataSource) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    pub fn with_client(source: DataSource, client: reqwest::Client) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            source,
            client,
            generation: 0,
            task: None,
            message_tx,
            message_rx,
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.task.is_some()
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let source = self.source.clone();
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        info!("Loading samples from {} (generation {})", source.describe(), generation);

        self.task = Some(tokio::spawn(async move {
            let result = source.load(&client).await;
            let _ = tx.send(LoadMessage { generation, result });
        }));

        generation
    }

    /// Aborts the in-flight load, if any. Returns true when a task was still running.
    pub fn cancel(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };
        if task.is_finished() {
            return false;
        }
        task.abort();
        debug!("Cancelled sample load (generation {})", self.generation);
        true
    }

    /// Next result of the current generation. Results of cancelled loads are skipped.
    /// Cancel safe.
    pub async fn recv(&mut self) -> Option<LoadMessage> {
        loop {
            let message = self.message_rx.recv().await?;
            if message.generation == self.generation {
                self.task = None;
                return Some(message);
            }
            debug!("Dropping stale sample load (generation {})", message.generation);
        }
    }
}

impl Drop for SampleLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
