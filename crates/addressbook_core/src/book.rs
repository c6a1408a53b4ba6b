use crate::Address;

/// Insertion-ordered collection of addresses with a duplicate guard on
/// insert.
///
/// Invariant: no two entries match under [`Address::same_occupant`], except
/// after `replace_all`, which adopts its argument verbatim and leaves
/// uniqueness to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBook {
    entries: Vec<Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `address` at the end unless an entry with the same occupant
    /// tuple already exists. A duplicate insert is a no-op; the stored entry
    /// is neither updated nor merged.
    pub fn add(&mut self, address: Address) {
        let duplicate = self
            .entries
            .iter()
            .any(|entry| entry.same_occupant(&address));
        if !duplicate {
            self.entries.push(address);
        }
    }

    /// Removes every entry carrying `id`, covering the edge case of several
    /// entries sharing one source id. No-op when none match.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Discards the current entries and adopts `addresses` verbatim,
    /// preserving order and any duplicates it may contain.
    pub fn replace_all(&mut self, addresses: Vec<Address>) {
        self.entries = addresses;
    }

    /// Read-only snapshot of the current entries, in insertion order.
    pub fn select_all(&self) -> &[Address] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
