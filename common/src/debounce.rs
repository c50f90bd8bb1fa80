//! Search input debouncing.
//!
//! Every keystroke updates the raw text and hands out a ticket. The caller
//! sleeps for [`SEARCH_DEBOUNCE_MS`] and then calls [`Debouncer::settle`] with
//! the ticket; only the ticket of the latest keystroke yields the new effective
//! search term.

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    raw: String,
    effective: String,
    ticket: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently in the search box.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Term the table is filtered by.
    pub fn effective(&self) -> &str {
        &self.effective
    }

    pub fn input(&mut self, raw: String) -> u64 {
        self.raw = raw;
        self.ticket += 1;
        self.ticket
    }

    /// Returns the new effective term when `ticket` is still the latest and
    /// the settled text differs from the current effective term.
    pub fn settle(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.ticket || self.raw == self.effective {
            return None;
        }
        self.effective = self.raw.clone();
        Some(self.effective.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_keystroke_settles() {
        let mut debouncer = Debouncer::new();
        let tickets: Vec<u64> = ["a", "ad", "ada"]
            .iter()
            .map(|s| debouncer.input(s.to_string()))
            .collect();

        assert_eq!(debouncer.raw(), "ada");
        assert_eq!(debouncer.effective(), "");
        assert_eq!(debouncer.settle(tickets[0]), None);
        assert_eq!(debouncer.settle(tickets[1]), None);
        assert_eq!(debouncer.settle(tickets[2]), Some("ada".to_string()));
        assert_eq!(debouncer.effective(), "ada");
    }

    #[test]
    fn settling_twice_fires_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.input("acme".to_string());
        assert_eq!(debouncer.settle(ticket), Some("acme".to_string()));
        assert_eq!(debouncer.settle(ticket), None);
    }

    #[test]
    fn returning_to_the_effective_term_fires_nothing() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.input("x".to_string());
        debouncer.settle(ticket);
        debouncer.input("xy".to_string());
        let ticket = debouncer.input("x".to_string());
        assert_eq!(debouncer.settle(ticket), None);
    }
}
