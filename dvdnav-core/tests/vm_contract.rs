//! Exact VM call sequences, checked with mockall doubles.

#[path = "nav_support/mod.rs"]
mod nav_support;

use dvdnav_contracts::vm::{CommandOutcome, VirtualMachine, VmError};
use dvdnav_core::{ActivationOutcome, NavError, NavSession, StillFlag};
use dvdnav_model::Bytecode;
use mockall::{Sequence, mock, predicate::eq};
use nav_support::{LINK_TITLE_1, empty_menu, two_button_menu};

mock! {
    pub Vm {}

    impl VirtualMachine for Vm {
        fn read_selection_register(&self) -> i32;
        fn write_selection_register(&mut self, button: i32);
        fn execute(&mut self, command: &Bytecode) -> Result<CommandOutcome, VmError>;
        fn advance_to_next_unit(&mut self) -> Result<(), VmError>;
        fn hop_channel(&self) -> u32;
        fn bump_hop_channel(&mut self);
    }
}

#[test]
fn activation_executes_the_registered_button_command() {
    let mut vm = MockVm::new();
    vm.expect_read_selection_register().return_const(1);
    vm.expect_execute()
        .with(eq(LINK_TITLE_1))
        .times(1)
        .returning(|_| Ok(CommandOutcome::Jump));
    vm.expect_bump_hop_channel().times(1).return_const(());
    vm.expect_hop_channel().return_const(7u32);
    vm.expect_write_selection_register().never();

    let session = NavSession::new(vm, StillFlag::paused());
    session.install_packet(two_button_menu());

    assert!(session.activate().unwrap().caused_jump());
}

#[test]
fn selection_is_written_before_the_command_runs() {
    let mut seq = Sequence::new();
    let mut vm = MockVm::new();
    vm.expect_read_selection_register()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(0);
    vm.expect_write_selection_register()
        .with(eq(2))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    vm.expect_read_selection_register()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(2);
    vm.expect_execute()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(CommandOutcome::NoOp));
    // read back once more to settle the highlight
    vm.expect_read_selection_register()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(2);
    vm.expect_bump_hop_channel().never();

    let session = NavSession::new(vm, StillFlag::default());
    session.install_packet(two_button_menu());

    let outcome = session.select_and_activate(2).unwrap();
    assert!(matches!(
        outcome,
        ActivationOutcome::Executed {
            caused_jump: false,
            ..
        }
    ));
}

#[test]
fn vm_errors_are_passed_through_untouched() {
    let mut vm = MockVm::new();
    vm.expect_read_selection_register().return_const(2);
    vm.expect_execute()
        .times(1)
        .returning(|_| Err(VmError::Stopped));
    vm.expect_bump_hop_channel().never();

    let session = NavSession::new(vm, StillFlag::default());
    session.install_packet(two_button_menu());

    assert_eq!(session.activate(), Err(NavError::Vm(VmError::Stopped)));
}

#[test]
fn failed_still_release_keeps_the_still() {
    let mut vm = MockVm::new();
    vm.expect_read_selection_register().return_const(0);
    vm.expect_advance_to_next_unit()
        .times(1)
        .returning(|| Err(VmError::Other("no next cell".to_string())));
    vm.expect_execute().never();

    let session = NavSession::new(vm, StillFlag::paused());
    session.install_packet(empty_menu());

    assert!(matches!(session.activate(), Err(NavError::Vm(_))));
    assert!(session.with_playback(|still| {
        use dvdnav_contracts::playback::StillFrameState;
        still.is_paused_for_still()
    }));
}
