use crate::models::Record;

/// Handed out when a reload starts; the response is applied with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReloadTicket(u64);

/// Client-side copy of the latest record list for one page.
///
/// Reloads are sequenced: [`begin_reload`](Self::begin_reload) issues a ticket
/// and [`apply`](Self::apply) only accepts a response whose ticket is newer
/// than the last one applied. A slow reload that resolves after a newer one
/// is dropped instead of overwriting fresher data.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
    issued: u64,
    applied: u64,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.issued += 1;
        ReloadTicket(self.issued)
    }

    /// Replace the records with a reload result. Returns `false` when the
    /// ticket is stale and the result was discarded.
    pub fn apply(&mut self, ticket: ReloadTicket, records: Vec<T>) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.records = records;
        true
    }
}

impl<T: Record> RecordStore<T> {
    pub fn find(&self, id: u64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }
}
