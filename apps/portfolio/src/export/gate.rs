use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::export::{ExportError, PrintDocument};

/// Tracks which printable documents are currently being exported.
///
/// At most one export per document runs at a time. A second request for the same
/// document is refused with `ExportError::InProgress` instead of queueing.
#[derive(Debug, Default)]
pub struct ExportGate {
    in_flight: Mutex<HashSet<PrintDocument>>,
}

impl ExportGate {
    /// Marks `document` as in flight. The returned guard owns a handle to the gate and
    /// clears the mark on drop, so it can travel into a blocking task and keep the
    /// gate closed until that task ends.
    pub fn try_acquire(
        self: &Arc<Self>,
        document: PrintDocument,
    ) -> Result<InFlight, ExportError> {
        let mut in_flight = self.in_flight.lock();
        if !in_flight.insert(document) {
            return Err(ExportError::InProgress(document));
        }
        Ok(InFlight {
            gate: Arc::clone(self),
            document,
        })
    }
}

/// RAII marker for one running export.
#[derive(Debug)]
pub struct InFlight {
    gate: Arc<ExportGate>,
    document: PrintDocument,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.gate.in_flight.lock().remove(&self.document);
    }
}
