/// Trailing-edge debounce bookkeeping.
///
/// Every keystroke [`arm`](Debouncer::arm)s a new ticket and starts a timer;
/// when the timer fires the work runs only if its ticket is still the latest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

impl Debouncer {
    pub fn arm(&mut self) -> DebounceTicket {
        self.generation += 1;
        DebounceTicket(self.generation)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }
}
