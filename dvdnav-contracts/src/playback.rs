use std::sync::Arc;

use dvdnav_model::packet::NavigationPacket;

/// Still-frame flag owned by the surrounding player.
pub trait StillFrameState: Send {
    /// Playback is holding a frame and waiting for the user.
    fn is_paused_for_still(&self) -> bool;

    fn clear_still(&mut self);
}

/// Producer of decoded navigation packets, one per playable unit.
pub trait PacketSource {
    fn current_packet(&self) -> Arc<NavigationPacket>;
}

impl<S: StillFrameState + ?Sized> StillFrameState for Box<S> {
    fn is_paused_for_still(&self) -> bool {
        (**self).is_paused_for_still()
    }

    fn clear_still(&mut self) {
        (**self).clear_still()
    }
}
