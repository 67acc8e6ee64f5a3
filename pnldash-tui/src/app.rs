//! Application state — single-owner, main-thread only.
//!
//! All dashboard state lives here. The worker thread communicates via
//! channels; display state is cleared as a whole on any pipeline failure so
//! stale charts never outlive their error.

use std::sync::mpsc::{Receiver, Sender};

use pnldash_core::{pipeline, query, QueryInput, RenderBundle, Timeframe, SUCCESS_STATUS};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Pipeline phase for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Fetching,
    Transforming,
    Rendered,
    Error,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validating => "validating",
            Phase::Fetching => "fetching",
            Phase::Transforming => "transforming",
            Phase::Rendered => "rendered",
            Phase::Error => "error",
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Navigable rows of the input form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Timeframe,
    FromDate,
    ToDate,
    Market,
    Model,
    Node,
}

impl FormRow {
    pub const ALL: [FormRow; 6] = [
        FormRow::Timeframe,
        FormRow::FromDate,
        FormRow::ToDate,
        FormRow::Market,
        FormRow::Model,
        FormRow::Node,
    ];

    pub fn index(self) -> usize {
        match self {
            FormRow::Timeframe => 0,
            FormRow::FromDate => 1,
            FormRow::ToDate => 2,
            FormRow::Market => 3,
            FormRow::Model => 4,
            FormRow::Node => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormRow::Timeframe => "Timeframe",
            FormRow::FromDate => "From Date",
            FormRow::ToDate => "To Date",
            FormRow::Market => "Market",
            FormRow::Model => "Model",
            FormRow::Node => "Node",
        }
    }

    pub fn next(self) -> FormRow {
        FormRow::ALL[(self.index() + 1) % FormRow::ALL.len()]
    }

    pub fn prev(self) -> FormRow {
        FormRow::ALL[(self.index() + FormRow::ALL.len() - 1) % FormRow::ALL.len()]
    }
}

/// The five text fields plus the cursor row.
#[derive(Debug, Clone)]
pub struct FormState {
    pub cursor: FormRow,
    pub from_date: String,
    pub to_date: String,
    pub market: String,
    pub model: String,
    pub node: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            cursor: FormRow::FromDate,
            from_date: String::new(),
            to_date: String::new(),
            market: String::new(),
            model: String::new(),
            node: String::new(),
        }
    }
}

impl FormState {
    /// Field value for a text row; the timeframe row has none.
    pub fn value(&self, row: FormRow) -> Option<&str> {
        match row {
            FormRow::Timeframe => None,
            FormRow::FromDate => Some(&self.from_date),
            FormRow::ToDate => Some(&self.to_date),
            FormRow::Market => Some(&self.market),
            FormRow::Model => Some(&self.model),
            FormRow::Node => Some(&self.node),
        }
    }

    pub fn value_mut(&mut self, row: FormRow) -> Option<&mut String> {
        match row {
            FormRow::Timeframe => None,
            FormRow::FromDate => Some(&mut self.from_date),
            FormRow::ToDate => Some(&mut self.to_date),
            FormRow::Market => Some(&mut self.market),
            FormRow::Model => Some(&mut self.model),
            FormRow::Node => Some(&mut self.node),
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub form: FormState,
    pub timeframe: Timeframe,
    pub phase: Phase,
    /// Charts and stats of the last successful run; `None` renders both
    /// charts and all three stat cells empty.
    pub display: Option<RenderBundle>,
    /// Whether a submit has ever happened; timeframe changes only re-run
    /// the pipeline afterwards.
    pub submitted: bool,
    pub status: Option<(String, StatusLevel)>,

    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            running: true,
            form: FormState::default(),
            timeframe: Timeframe::default(),
            phase: Phase::Idle,
            display: None,
            submitted: false,
            status: None,
            worker_tx,
            worker_rx,
        }
    }

    /// Snapshot the form as raw pipeline input.
    pub fn query_input(&self) -> QueryInput {
        QueryInput {
            from_date: Some(self.form.from_date.clone()),
            to_date: Some(self.form.to_date.clone()),
            market: Some(self.form.market.clone()),
            model: Some(self.form.model.clone()),
            node: Some(self.form.node.clone()),
        }
    }

    /// Submit trigger: validate, then hand the fetch to the worker.
    ///
    /// At most one run is in flight; a trigger while fetching is dropped
    /// with a warning rather than queued.
    pub fn submit(&mut self) {
        if self.phase == Phase::Fetching {
            self.set_warning("A report request is already in flight");
            return;
        }

        self.phase = Phase::Validating;
        match query::build(&self.query_input()) {
            Ok(query) => {
                self.submitted = true;
                self.phase = Phase::Fetching;
                self.set_status("Fetching report...");
                let _ = self.worker_tx.send(WorkerCommand::FetchReport { query });
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    /// Timeframe trigger: cycle the selector and re-run the pipeline if a
    /// submit has happened before.
    pub fn cycle_timeframe(&mut self, forward: bool) {
        self.timeframe = if forward {
            self.timeframe.next()
        } else {
            self.timeframe.prev()
        };
        if self.submitted {
            self.submit();
        }
    }

    /// Worker response: transform rows on the main thread, or surface the
    /// fetch failure.
    pub fn handle_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Report { rows } => {
                self.phase = Phase::Transforming;
                match pipeline::render_rows(&rows, self.timeframe) {
                    Ok(bundle) => {
                        self.display = Some(bundle);
                        self.phase = Phase::Rendered;
                        self.set_status(SUCCESS_STATUS);
                    }
                    Err(err) => self.fail(err.to_string()),
                }
            }
            WorkerResponse::Failed { message } => self.fail(message),
        }
    }

    /// Any pipeline failure: clear both charts and all stats, show the
    /// specific error text.
    pub fn fail(&mut self, message: String) {
        self.display = None;
        self.phase = Phase::Error;
        self.status = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), StatusLevel::Warning));
    }
}
