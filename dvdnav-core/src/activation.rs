use std::sync::Arc;

use dvdnav_contracts::playback::StillFrameState;
use dvdnav_contracts::vm::VirtualMachine;
use dvdnav_model::ids::ButtonIndex;
use dvdnav_model::packet::NavigationPacket;
use tracing::{debug, info, warn};

use crate::error::{NavError, Result};
use crate::options::SessionOptions;
use crate::session::SessionState;

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ActivationOutcome {
    /// The selected button's command ran.
    Executed {
        button: ButtonIndex,
        caused_jump: bool,
    },
    /// No button was selectable and playback sat on a still frame; the still
    /// was released and the VM moved on to the next unit.
    AdvancedPastStill,
}

impl ActivationOutcome {
    pub fn caused_jump(&self) -> bool {
        matches!(
            self,
            ActivationOutcome::Executed {
                caused_jump: true,
                ..
            }
        )
    }
}

/// Activate the button held in the VM register. Runs with the session lock
/// held by the caller for the whole sequence.
pub(crate) fn dispatch<V, S>(
    state: &mut SessionState<V, S>,
    options: &SessionOptions,
) -> Result<ActivationOutcome>
where
    V: VirtualMachine,
    S: StillFrameState,
{
    let packet = Arc::clone(&state.packet);
    // Bytecode may have moved the selection, so the register wins over the
    // cached highlight.
    let register = state.vm.read_selection_register();

    let Some((index, button)) = ButtonIndex::from_raw(register)
        .and_then(|index| packet.button(index).map(|button| (index, button)))
    else {
        return release_still(state, options, &packet, register);
    };

    debug!("activating button {index}, command {:?}", button.command);
    let outcome = match state.vm.execute(&button.command) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("command of button {index} failed: {err}");
            state.highlight.revalidate(&packet, &mut state.vm);
            return Err(err.into());
        }
    };
    state.highlight.settle_activation(&packet, &mut state.vm, index);

    let caused_jump = outcome.is_jump();
    if caused_jump {
        state.vm.bump_hop_channel();
        state.playback.clear_still();
        info!(
            hop_channel = state.vm.hop_channel(),
            "button {index} scheduled a jump"
        );
    }

    Ok(ActivationOutcome::Executed {
        button: index,
        caused_jump,
    })
}

fn release_still<V, S>(
    state: &mut SessionState<V, S>,
    options: &SessionOptions,
    packet: &NavigationPacket,
    register: i32,
) -> Result<ActivationOutcome>
where
    V: VirtualMachine,
    S: StillFrameState,
{
    let buttons = packet.button_count();
    if state.playback.is_paused_for_still()
        && options.still_release.releases(buttons)
    {
        info!(
            register,
            buttons, "activation on a still frame without a button, advancing"
        );
        let advanced = state.vm.advance_to_next_unit();
        state.highlight.revalidate(packet, &mut state.vm);
        advanced?;
        state.playback.clear_still();
        return Ok(ActivationOutcome::AdvancedPastStill);
    }

    debug!(register, buttons, "activation ignored, no current button");
    Err(NavError::NoCurrentButton)
}
