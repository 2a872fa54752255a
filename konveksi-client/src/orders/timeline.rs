use shared::models::ProgressEntry;

/// Append-only progress timeline of one order
///
/// Holds entries exactly in the order received. Never sorts, dedups or drops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<ProgressEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the backend's list as-is
    pub fn from_entries(entries: Vec<ProgressEntry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: ProgressEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProgressEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ProgressEntry;
    type IntoIter = std::slice::Iter<'a, ProgressEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
