//! Save Status
//!
//! `Idle -> Saving -> Saved -> Idle`. Each save gets a generation so a
//! delayed revert from an older save cannot clobber a newer one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveTracker {
    pub status: SaveStatus,
    generation: u64,
}

impl SaveTracker {
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = SaveStatus::Saving;
        self.generation
    }

    /// Result of save `generation`. Stale results are ignored.
    pub fn finish(&mut self, generation: u64, ok: bool) {
        if generation == self.generation {
            self.status = if ok { SaveStatus::Saved } else { SaveStatus::Idle };
        }
    }

    /// Revert after the saved indicator expired.
    pub fn settle(&mut self, generation: u64) {
        if generation == self.generation && self.status == SaveStatus::Saved {
            self.status = SaveStatus::Idle;
        }
    }
}
