//! Session object tying the highlight state, the VM and the still flag
//! together behind one lock.

use std::fmt;
use std::sync::Arc;

use dvdnav_contracts::playback::{PacketSource, StillFrameState};
use dvdnav_contracts::vm::VirtualMachine;
use dvdnav_model::area::{HighlightArea, HighlightStatus};
use dvdnav_model::button::Direction;
use dvdnav_model::ids::ButtonIndex;
use dvdnav_model::packet::NavigationPacket;
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::activation::{self, ActivationOutcome};
use crate::error::{NavError, Result};
use crate::highlight::{HighlightSnapshot, HighlightState};
use crate::options::SessionOptions;
use crate::projector;
use crate::resolve::{Neighbor, resolve_direction, resolve_point};

/// Result of a directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionOutcome {
    /// The button has no neighbor that way.
    Unchanged,
    Moved(ButtonIndex),
    /// The neighbor was an auto-action button and has been activated.
    AutoActivated {
        button: ButtonIndex,
        activation: ActivationOutcome,
    },
}

/// Everything guarded by the session lock.
pub(crate) struct SessionState<V, S> {
    pub(crate) vm: V,
    pub(crate) playback: S,
    pub(crate) packet: Arc<NavigationPacket>,
    pub(crate) highlight: HighlightState,
}

/// Interactive navigation for one playback session.
///
/// Decode and input threads share a session by reference (`Arc`). Every
/// method takes the session lock once and works on the packet snapshot
/// current at that moment, so resolve, select and activate never straddle a
/// packet swap.
pub struct NavSession<V, S> {
    state: Mutex<SessionState<V, S>>,
    options: SessionOptions,
}

impl<V, S> fmt::Debug for NavSession<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("NavSession");
        debug.field("options", &self.options);
        if let Some(state) = self.state.try_lock() {
            debug.field("buttons", &state.packet.button_count());
            debug.field("highlight", &state.highlight.snapshot());
        } else {
            debug.field("state", &"<locked>");
        }
        debug.finish()
    }
}

impl<V, S> NavSession<V, S>
where
    V: VirtualMachine,
    S: StillFrameState,
{
    pub fn new(vm: V, playback: S) -> Self {
        Self::with_options(vm, playback, SessionOptions::default())
    }

    pub fn with_options(vm: V, playback: S, options: SessionOptions) -> Self {
        Self {
            state: Mutex::new(SessionState {
                vm,
                playback,
                packet: Arc::new(NavigationPacket::empty()),
                highlight: HighlightState::new(),
            }),
            options,
        }
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Receive a snapshot after every status or selection change.
    pub fn subscribe(&self) -> watch::Receiver<HighlightSnapshot> {
        self.state.lock().highlight.subscribe()
    }

    /// Replace the navigation packet and revalidate the selection against
    /// it. Returns whether the highlight changed.
    pub fn install_packet(&self, packet: Arc<NavigationPacket>) -> bool {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        debug!(
            buttons = packet.button_count(),
            start_pts = packet.timing.start_pts,
            "installing navigation packet"
        );
        state.packet = packet;
        state.highlight.revalidate(&state.packet, &mut state.vm)
    }

    /// Pull the current packet from `source` and install it.
    pub fn sync_packet<P>(&self, source: &P) -> bool
    where
        P: PacketSource + ?Sized,
    {
        self.install_packet(source.current_packet())
    }

    pub fn packet(&self) -> Arc<NavigationPacket> {
        Arc::clone(&self.state.lock().packet)
    }

    /// `(status, button)` with the button read from the VM register.
    pub fn current_highlight(&self) -> (HighlightStatus, i32) {
        let state = self.state.lock();
        let (status, _) = state.highlight.current();
        (status, state.vm.read_selection_register())
    }

    pub fn snapshot(&self) -> HighlightSnapshot {
        self.state.lock().highlight.snapshot()
    }

    /// Packet and highlight read under one lock, for drawing a frame that
    /// never pairs a highlight with the wrong packet.
    pub fn snapshot_with_packet(
        &self,
    ) -> (Arc<NavigationPacket>, HighlightSnapshot) {
        let state = self.state.lock();
        (Arc::clone(&state.packet), state.highlight.snapshot())
    }

    pub fn select_button(&self, button: i32) -> Result<ButtonIndex> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let packet = Arc::clone(&state.packet);
        state.highlight.select(&packet, &mut state.vm, button)
    }

    /// Move the selection along the current button's link in `direction`.
    ///
    /// When the neighbor is an auto-action button whose command fails, the
    /// `Vm` error is returned but the selection has already moved to the
    /// neighbor; [`current_highlight`](Self::current_highlight) reports it.
    pub fn select_direction(
        &self,
        direction: Direction,
    ) -> Result<DirectionOutcome> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let packet = Arc::clone(&state.packet);
        let current = state.vm.read_selection_register();

        let neighbor = resolve_direction(&packet, current, direction)
            .ok_or_else(|| {
                debug!("ignoring {direction}: button {current} is not selectable");
                NavError::InvalidButton(current)
            })?;

        match neighbor {
            Neighbor::Stay => {
                trace!("no {direction} link from button {current}");
                Ok(DirectionOutcome::Unchanged)
            }
            Neighbor::Move {
                button,
                auto_action,
            } => {
                let button = state.highlight.select(
                    &packet,
                    &mut state.vm,
                    button.as_i32(),
                )?;
                if auto_action && self.options.follow_auto_action {
                    let activation = activation::dispatch(state, &self.options)?;
                    return Ok(DirectionOutcome::AutoActivated {
                        button,
                        activation,
                    });
                }
                Ok(DirectionOutcome::Moved(button))
            }
        }
    }

    /// Select the button under the pointer. No hit is not an error.
    pub fn select_point(&self, x: i32, y: i32) -> Result<Option<ButtonIndex>> {
        let mut guard = self.state.lock();
        Self::select_point_locked(&mut guard, x, y)
    }

    pub fn activate(&self) -> Result<ActivationOutcome> {
        let mut guard = self.state.lock();
        activation::dispatch(&mut guard, &self.options)
    }

    /// Pointer select followed by activation, whether or not anything was hit.
    pub fn activate_point(&self, x: i32, y: i32) -> Result<ActivationOutcome> {
        let mut guard = self.state.lock();
        Self::select_point_locked(&mut guard, x, y)?;
        activation::dispatch(&mut guard, &self.options)
    }

    pub fn select_and_activate(&self, button: i32) -> Result<ActivationOutcome> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let packet = Arc::clone(&state.packet);
        state.highlight.select(&packet, &mut state.vm, button)?;
        activation::dispatch(state, &self.options)
    }

    /// Whether the button in the VM register is an auto-action button.
    pub fn current_button_auto_action(&self) -> bool {
        let state = self.state.lock();
        state
            .packet
            .button_raw(state.vm.read_selection_register())
            .is_some_and(|button| button.auto_action)
    }

    /// Highlight of the selected button, or `None` when nothing valid is
    /// selected.
    pub fn current_highlight_area(&self, mode: u8) -> Option<HighlightArea> {
        let state = self.state.lock();
        let button = state.vm.read_selection_register();
        projector::project(&state.packet, button, mode).ok()
    }

    pub fn hop_channel(&self) -> u32 {
        self.state.lock().vm.hop_channel()
    }

    /// Run `f` against the VM under the session lock, then reconcile the
    /// highlight with whatever the VM did to its register.
    pub fn with_vm<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let result = f(&mut state.vm);
        state.highlight.revalidate(&state.packet, &mut state.vm);
        result
    }

    pub fn with_playback<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.state.lock().playback)
    }

    pub fn into_parts(self) -> (V, S) {
        let state = self.state.into_inner();
        (state.vm, state.playback)
    }

    fn select_point_locked(
        state: &mut SessionState<V, S>,
        x: i32,
        y: i32,
    ) -> Result<Option<ButtonIndex>> {
        let packet = Arc::clone(&state.packet);
        let Some(hit) = resolve_point(&packet, x, y) else {
            trace!("pointer at ({x}, {y}) hit no button");
            return Ok(None);
        };

        if hit.as_i32() != state.vm.read_selection_register() {
            state.highlight.select(&packet, &mut state.vm, hit.as_i32())?;
        }
        Ok(Some(hit))
    }
}
