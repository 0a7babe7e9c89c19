use dvdnav_model::button::Bytecode;
use thiserror::Error;

/// Result of executing one button command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran without changing the playback position.
    NoOp,
    /// The command scheduled a jump; playback is discontinuous.
    Jump,
}

impl CommandOutcome {
    pub fn is_jump(&self) -> bool {
        matches!(self, CommandOutcome::Jump)
    }
}

/// Failure reported by a VM implementation. Passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("command rejected: {0}")]
    Command(String),

    #[error("vm is not running")]
    Stopped,

    #[error("vm error: {0}")]
    Other(String),
}

/// Capability surface of the disc virtual machine.
///
/// Every method is called with the session lock held, so implementations do
/// not need their own synchronisation for register access.
pub trait VirtualMachine: Send {
    /// Button number currently held in the highlight register (0 = none).
    fn read_selection_register(&self) -> i32;

    fn write_selection_register(&mut self, button: i32);

    /// Run one button command block.
    fn execute(&mut self, command: &Bytecode) -> Result<CommandOutcome, VmError>;

    /// Leave the current cell and continue with the next playable unit.
    fn advance_to_next_unit(&mut self) -> Result<(), VmError>;

    /// Counter the seeking side uses to detect discontinuities.
    fn hop_channel(&self) -> u32;

    fn bump_hop_channel(&mut self);
}

impl<V: VirtualMachine + ?Sized> VirtualMachine for Box<V> {
    fn read_selection_register(&self) -> i32 {
        (**self).read_selection_register()
    }

    fn write_selection_register(&mut self, button: i32) {
        (**self).write_selection_register(button)
    }

    fn execute(&mut self, command: &Bytecode) -> Result<CommandOutcome, VmError> {
        (**self).execute(command)
    }

    fn advance_to_next_unit(&mut self) -> Result<(), VmError> {
        (**self).advance_to_next_unit()
    }

    fn hop_channel(&self) -> u32 {
        (**self).hop_channel()
    }

    fn bump_hop_channel(&mut self) {
        (**self).bump_hop_channel()
    }
}
