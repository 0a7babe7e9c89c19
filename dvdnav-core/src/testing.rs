//! Minimal VM double for unit tests inside this crate.

use dvdnav_contracts::vm::{CommandOutcome, VirtualMachine, VmError};
use dvdnav_model::button::Bytecode;

#[derive(Debug, Default)]
pub(crate) struct RegisterOnlyVm {
    pub register: i32,
}

impl VirtualMachine for RegisterOnlyVm {
    fn read_selection_register(&self) -> i32 {
        self.register
    }

    fn write_selection_register(&mut self, button: i32) {
        self.register = button;
    }

    fn execute(&mut self, _command: &Bytecode) -> Result<CommandOutcome, VmError> {
        Ok(CommandOutcome::NoOp)
    }

    fn advance_to_next_unit(&mut self) -> Result<(), VmError> {
        Ok(())
    }

    fn hop_channel(&self) -> u32 {
        0
    }

    fn bump_hop_channel(&mut self) {}
}
