use std::fmt;

use crate::sync::SyncKind;

/// Counters accumulated over one sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncResult {
    pub added: usize,
    pub deleted: usize,
    pub updated: usize,
    pub up_to_date: usize,
}

impl SyncResult {
    pub fn record(&mut self, kind: SyncKind) {
        match kind {
            SyncKind::Create => self.added += 1,
            SyncKind::Delete => self.deleted += 1,
            SyncKind::Update => self.updated += 1,
            SyncKind::UpToDate => self.up_to_date += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.added + self.deleted + self.updated + self.up_to_date
    }
}

impl FromIterator<SyncKind> for SyncResult {
    fn from_iter<I: IntoIterator<Item = SyncKind>>(iter: I) -> Self {
        let mut result = SyncResult::default();
        for kind in iter {
            result.record(kind);
        }
        result
    }
}

impl fmt::Display for SyncResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Events added: {}, deleted: {}, updated: {}, up-to-date: {}",
            self.added, self.deleted, self.updated, self.up_to_date
        )
    }
}
