/// Append-only, insertion-ordered record sequence.
///
/// Entries can be added and walked in order, never removed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger<T> {
    entries: Vec<T>,
}

impl<T> Ledger<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry at the end
    pub fn append(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.append("c");
        ledger.append("a");
        ledger.append("b");

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.iter().copied().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger: Ledger<u32> = Ledger::default();

        assert!(ledger.is_empty());
        assert_eq!(ledger.iter().next(), None);
    }
}
