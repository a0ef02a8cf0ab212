//! Invoice batch storage abstraction
//!
//! Generated invoice batches used to live in ambient module state; this
//! replaces that with an explicit repository injected into callers, so
//! lifecycle is owned by the process rather than by a global. The bundled
//! implementation is in-memory and keeps whole-batch replace semantics:
//! each ingestion run supersedes the previous batch.

use std::sync::RwLock;

use tracing::debug;

use crate::app::models::{BatchSummary, InvoiceRecord};

/// Repository interface for generated invoice batches
pub trait InvoiceStore: Send + Sync {
    /// Replace the stored batch with a newly generated one
    fn replace_batch(&self, invoices: Vec<InvoiceRecord>);

    /// All invoices in the current batch, in generation order
    fn batch(&self) -> Vec<InvoiceRecord>;

    /// Look up one invoice by its unit label
    fn find_by_unit(&self, unit: &str) -> Option<InvoiceRecord>;

    /// Number of invoices in the current batch
    fn len(&self) -> usize;

    /// Whether the store holds no invoices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all stored invoices
    fn clear(&self);

    /// Aggregate figures over the current batch
    fn summary(&self) -> BatchSummary {
        BatchSummary::from_invoices(&self.batch())
    }
}

/// In-memory invoice store
///
/// Interior locking keeps the store shareable across callers; reads clone
/// out value types so no references into the store escape the lock.
#[derive(Debug, Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<Vec<InvoiceRecord>>,
}

impl MemoryInvoiceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceStore for MemoryInvoiceStore {
    fn replace_batch(&self, invoices: Vec<InvoiceRecord>) {
        debug!("Storing batch of {} invoices", invoices.len());
        let mut guard = self.invoices.write().expect("invoice store lock poisoned");
        *guard = invoices;
    }

    fn batch(&self) -> Vec<InvoiceRecord> {
        self.invoices
            .read()
            .expect("invoice store lock poisoned")
            .clone()
    }

    fn find_by_unit(&self, unit: &str) -> Option<InvoiceRecord> {
        self.invoices
            .read()
            .expect("invoice store lock poisoned")
            .iter()
            .find(|invoice| invoice.unit == unit)
            .cloned()
    }

    fn len(&self) -> usize {
        self.invoices.read().expect("invoice store lock poisoned").len()
    }

    fn clear(&self) {
        self.invoices
            .write()
            .expect("invoice store lock poisoned")
            .clear();
    }
}
