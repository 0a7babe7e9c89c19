use dvdnav_contracts::playback::StillFrameState;

/// Plain still-frame flag for players that keep no richer playback state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StillFlag {
    paused: bool,
}

impl StillFlag {
    pub fn paused() -> Self {
        Self { paused: true }
    }

    pub fn set(&mut self, paused: bool) {
        self.paused = paused;
    }
}

impl StillFrameState for StillFlag {
    fn is_paused_for_still(&self) -> bool {
        self.paused
    }

    fn clear_still(&mut self) {
        self.paused = false;
    }
}
