//! Diagnostic sinks a table reports to.
//!
//! Nothing here affects table behavior. A sink receives growth events as they
//! happen and, on request, every stored entry.

use log::info;

use super::growth::GrowthEvent;

/// Receiver for table diagnostics. All methods default to no-ops.
pub trait Diagnostics {
    /// Called once per growth, before entries are replayed into the new store.
    fn on_grow(&mut self, _event: &GrowthEvent) {}

    /// Called for each entry walked by [`ChainedTable::report`](super::ChainedTable::report).
    fn on_entry(&mut self, _slot: usize, _key: i32, _value: i32) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Writes growth events and entries as human-readable `info` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn on_grow(&mut self, event: &GrowthEvent) {
        info!(
            "Expanding table from {} to {} at {} occupied slots",
            event.old_capacity, event.new_capacity, event.occupied_at_trigger
        );
    }

    fn on_entry(&mut self, slot: usize, key: i32, value: i32) {
        info!("#{}\tKey: {}, Value: {}", slot, key, value);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn on_grow(&mut self, event: &GrowthEvent) {
        (**self).on_grow(event);
    }

    fn on_entry(&mut self, slot: usize, key: i32, value: i32) {
        (**self).on_entry(slot, key, value);
    }
}

/// Keeps everything it is told, for inspection in tests and tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDiagnostics {
    pub growths: Vec<GrowthEvent>,
    pub entries: Vec<(usize, i32, i32)>,
}

impl Diagnostics for RecordingDiagnostics {
    fn on_grow(&mut self, event: &GrowthEvent) {
        self.growths.push(*event);
    }

    fn on_entry(&mut self, slot: usize, key: i32, value: i32) {
        self.entries.push((slot, key, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<D: Diagnostics>(mut sink: D) {
        sink.on_grow(&GrowthEvent {
            old_capacity: 10,
            new_capacity: 20,
            occupied_at_trigger: 8,
        });
        sink.on_entry(3, 13, 26);
    }

    #[test]
    fn test_recording_through_mut_ref() {
        let mut recorder = RecordingDiagnostics::default();
        feed(&mut recorder);
        assert_eq!(recorder.growths.len(), 1);
        assert_eq!(recorder.growths[0].new_capacity, 20);
        assert_eq!(recorder.entries, vec![(3, 13, 26)]);
    }

    #[test]
    fn test_silent_sinks_accept_events() {
        let event = GrowthEvent {
            old_capacity: 1,
            new_capacity: 2,
            occupied_at_trigger: 1,
        };
        NoDiagnostics.on_grow(&event);
        NoDiagnostics.on_entry(0, 0, 0);
        LogDiagnostics.on_grow(&event);
        LogDiagnostics.on_entry(0, 0, 0);
    }
}
