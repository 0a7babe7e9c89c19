use dvdnav_contracts::vm::VirtualMachine;
use dvdnav_model::area::HighlightStatus;
use dvdnav_model::ids::ButtonIndex;
use dvdnav_model::packet::NavigationPacket;
use tokio::sync::watch;
use tracing::debug;

use crate::error::{NavError, Result};

/// Value published to subscribers after every highlight mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightSnapshot {
    pub status: HighlightStatus,
    pub button: i32,
    /// Bumped on every mutation, including re-selection of the same button.
    pub generation: u64,
}

/// Tri-state highlight status plus the selected button.
///
/// The VM's highlight register is authoritative for the selection; this type
/// mirrors every successful selection into it and keeps a cached copy for
/// notifications. Callers hold the session lock around every method.
#[derive(Debug)]
pub struct HighlightState {
    status: HighlightStatus,
    selected: i32,
    generation: u64,
    notifier: watch::Sender<HighlightSnapshot>,
}

impl Default for HighlightState {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightState {
    pub fn new() -> Self {
        let (notifier, _) = watch::channel(HighlightSnapshot::default());
        Self {
            status: HighlightStatus::Disabled,
            selected: 0,
            generation: 0,
            notifier,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<HighlightSnapshot> {
        self.notifier.subscribe()
    }

    /// Cached `(status, selected_button)`.
    pub fn current(&self) -> (HighlightStatus, i32) {
        (self.status, self.selected)
    }

    pub fn snapshot(&self) -> HighlightSnapshot {
        HighlightSnapshot {
            status: self.status,
            button: self.selected,
            generation: self.generation,
        }
    }

    /// Select `button` in `packet`, writing it through to the VM register.
    ///
    /// Selecting the already selected button is not de-duplicated.
    pub fn select<V>(
        &mut self,
        packet: &NavigationPacket,
        vm: &mut V,
        button: i32,
    ) -> Result<ButtonIndex>
    where
        V: VirtualMachine + ?Sized,
    {
        let index = ButtonIndex::from_raw(button)
            .filter(|_| packet.contains(button))
            .ok_or(NavError::InvalidButton(button))?;

        vm.write_selection_register(index.as_i32());
        debug!(button, "highlight selected");
        self.transition(HighlightStatus::Selected, index.as_i32());
        Ok(index)
    }

    /// Settle the highlight after `button`'s command ran.
    ///
    /// The command may have rewritten the register. If it still holds
    /// `button` the highlight becomes Activated; otherwise the new register
    /// value is selected, or the highlight is disabled when the packet cannot
    /// hold it. Returns whether `button` stayed current.
    pub fn settle_activation<V>(
        &mut self,
        packet: &NavigationPacket,
        vm: &mut V,
        button: ButtonIndex,
    ) -> bool
    where
        V: VirtualMachine + ?Sized,
    {
        let register = vm.read_selection_register();
        if register == button.as_i32() {
            self.transition(HighlightStatus::Activated, register);
            return true;
        }

        debug!(
            activated = button.as_i32(),
            register, "command moved the selection"
        );
        if packet.contains(register) {
            self.transition(HighlightStatus::Selected, register);
        } else {
            self.revalidate(packet, vm);
        }
        false
    }

    /// Re-check the selection against a freshly installed packet.
    ///
    /// A register value the packet cannot hold forces the highlight to
    /// Disabled and clears the register. A valid register on a disabled
    /// highlight (bytecode picked a default button) turns it on. Returns
    /// whether anything changed.
    pub fn revalidate<V>(&mut self, packet: &NavigationPacket, vm: &mut V) -> bool
    where
        V: VirtualMachine + ?Sized,
    {
        let register = vm.read_selection_register();

        if !packet.contains(register) {
            if register != 0 {
                vm.write_selection_register(0);
            }
            if self.status == HighlightStatus::Disabled && self.selected <= 0 {
                return false;
            }
            debug!(
                register,
                buttons = packet.button_count(),
                "selection no longer valid, disabling highlight"
            );
            self.transition(HighlightStatus::Disabled, 0);
            return true;
        }

        match self.status {
            HighlightStatus::Disabled => {
                self.transition(HighlightStatus::Selected, register);
                true
            }
            _ if self.selected != register => {
                // Bytecode moved the selection behind our back.
                self.transition(self.status, register);
                true
            }
            _ => false,
        }
    }

    fn transition(&mut self, status: HighlightStatus, button: i32) {
        self.status = status;
        self.selected = button;
        self.generation = self.generation.wrapping_add(1);
        self.notifier.send_replace(self.snapshot());
    }
}
