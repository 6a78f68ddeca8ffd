/// Terminal state of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Input file not present. Informational, not an error.
    Absent,
    Succeeded {
        compressed_bytes: u64,
        decompressed_bytes: u64,
    },
    /// Open, decode or write failed. `error` carries the full context chain.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReport {
    pub input: String,
    pub output: String,
    pub outcome: EntryOutcome,
}

/// Per-entry outcomes in manifest order.
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,
}

impl BatchReport {
    pub fn push(&mut self, entry: EntryReport) {
        self.entries.push(entry);
    }

    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn absent(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Absent))
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Succeeded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    pub fn decompressed_bytes(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| match e.outcome {
                EntryOutcome::Succeeded { decompressed_bytes, .. } => decompressed_bytes,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
