use crate::session::actions::METERS_SUMMARY;
use egmlog_types::LogEntry;
use std::ops::Index;

/// Ordered entries of one log file, addressable by position.
///
/// Also keeps the ascending positions of every "Meters summary" entry so the
/// balance lookup that precedes each trigger is a binary search rather than
/// a backward walk.
#[derive(Debug, Clone)]
pub struct EntryCache<'a> {
    entries: &'a [LogEntry],
    meters: Vec<usize>,
}

impl<'a> EntryCache<'a> {
    pub fn new(entries: &'a [LogEntry]) -> Self {
        let meters = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_action(METERS_SUMMARY))
            .map(|(idx, _)| idx)
            .collect();

        Self { entries, meters }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'a [LogEntry] {
        self.entries
    }

    /// Nearest "Meters summary" entry strictly before `index`.
    ///
    /// Same answer as `scan_backward_for(cache, index, is_meter)`.
    pub fn meter_before(&self, index: usize) -> Option<&'a LogEntry> {
        let entries = self.entries;
        let count = self.meters.partition_point(|&pos| pos < index);
        count.checked_sub(1).map(|slot| &entries[self.meters[slot]])
    }
}

impl<'a> Index<usize> for EntryCache<'a> {
    type Output = LogEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

/// Nearest entry strictly before `from` that satisfies `predicate`.
pub fn scan_backward_for<'a, P>(
    cache: &EntryCache<'a>,
    from: usize,
    predicate: P,
) -> Option<&'a LogEntry>
where
    P: Fn(&LogEntry) -> bool,
{
    let end = from.min(cache.len());
    cache.entries()[..end].iter().rev().find(|entry| predicate(*entry))
}

/// First entry at or after `from` that satisfies `predicate`, with its index.
pub fn scan_forward_for<'a, P>(
    cache: &EntryCache<'a>,
    from: usize,
    predicate: P,
) -> Option<(&'a LogEntry, usize)>
where
    P: Fn(&LogEntry) -> bool,
{
    cache
        .entries()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, entry)| predicate(*entry))
        .map(|(idx, entry)| (entry, idx))
}
