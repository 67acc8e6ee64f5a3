//! Background worker thread — the blocking network call runs here.
//!
//! Communication with the main thread is via `mpsc` channels. The worker
//! owns the report source; it is handed in at spawn time so tests can use a
//! mock and the binary can construct the HTTP client once at startup.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use pnldash_core::{ReportQuery, ReportRow, ReportSource};

/// Commands sent from the dashboard to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchReport { query: ReportQuery },
    Shutdown,
}

/// Responses sent from the worker back to the dashboard.
#[derive(Debug)]
pub enum WorkerResponse {
    /// Raw rows, still unwindowed; the main thread transforms them.
    Report { rows: Vec<ReportRow> },
    /// Fetch failed; the message is already user-facing.
    Failed { message: String },
}

/// Spawn the worker thread around a report source.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    source: Box<dyn ReportSource>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("pnldash-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, source);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    source: Box<dyn ReportSource>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::FetchReport { query }) => {
                let resp = match source.fetch(&query) {
                    Ok(rows) => WorkerResponse::Report { rows },
                    Err(err) => WorkerResponse::Failed {
                        message: err.to_string(),
                    },
                };
                let _ = tx.send(resp);
            }
        }
    }
}
