//! Background picker requests for the UI thread

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use super::import::ImportError;
use super::picker::{FilePicker, PickRequest, PickResponse};

type PickOutcome = Result<PickResponse, ImportError>;

/// At most one outstanding picker request.
///
/// The picker runs on the tokio runtime; the UI polls for its response
/// each frame and applies it to the library on its own thread.
#[derive(Debug, Default)]
pub struct ImportTask {
    pending: Option<oneshot::Receiver<PickOutcome>>,
}

impl ImportTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a picker request is outstanding
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Launch the picker. `on_done` runs on the runtime once a response is
    /// ready (used to wake the UI).
    pub fn start<F>(
        &mut self,
        runtime: &Handle,
        picker: Arc<dyn FilePicker>,
        request: PickRequest,
        on_done: F,
    ) -> Result<(), ImportError>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_running() {
            tracing::warn!("Ignoring import request: one is already in progress");
            return Err(ImportError::AlreadyRunning);
        }

        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            let response = picker.pick(&request).await;
            if tx.send(response).is_err() {
                tracing::debug!("Import receiver dropped before picker finished");
            }
            on_done();
        });

        self.pending = Some(rx);
        Ok(())
    }

    /// Take the picker response if it has arrived
    pub fn poll(&mut self) -> Option<PickOutcome> {
        let rx = self.pending.as_mut()?;
        match rx.try_recv() {
            Ok(response) => {
                self.pending = None;
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                Some(Err(ImportError::Picker(
                    "picker task ended without a response".to_string(),
                )))
            }
        }
    }
}
