//! Shared fixtures for navigation integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use dvdnav_contracts::vm::{CommandOutcome, VirtualMachine, VmError};
use dvdnav_model::{
    ButtonDescriptor, ButtonLinks, ButtonRect, Bytecode, ColorTable,
    HighlightTiming, NavigationPacket, SelectionRegister,
};

pub const LINK_TITLE_1: Bytecode = Bytecode([0x30, 0x02, 0, 0, 0, 1, 0, 0]);
pub const SET_GPRM: Bytecode = Bytecode([0x71, 0x00, 0, 3, 0, 7, 0, 0]);
pub const BROKEN: Bytecode = Bytecode([0xff; 8]);
/// SetHL_BTN 2: the command itself moves the highlight to button 2.
pub const SET_HL_BTN_2: Bytecode = Bytecode([0x56, 0x00, 0, 0, 0x08, 0x00, 0, 0]);

/// VM double that keeps the highlight register in its on-disc encoding and
/// records every call the core makes.
#[derive(Debug, Default)]
pub struct RecordingVm {
    pub register: SelectionRegister,
    pub hop_channel: u32,
    pub executed: Vec<Bytecode>,
    pub advanced: u32,
    pub outcomes: HashMap<Bytecode, Result<CommandOutcome, VmError>>,
    /// Register values written by a command when it runs.
    pub register_writes: HashMap<Bytecode, i32>,
}

impl RecordingVm {
    pub fn new() -> Self {
        let mut vm = Self::default();
        vm.outcomes.insert(LINK_TITLE_1, Ok(CommandOutcome::Jump));
        vm.register_writes.insert(SET_HL_BTN_2, 2);
        vm.outcomes.insert(
            BROKEN,
            Err(VmError::Command("unknown opcode 0xff".to_string())),
        );
        vm
    }
}

impl VirtualMachine for RecordingVm {
    fn read_selection_register(&self) -> i32 {
        self.register.button()
    }

    fn write_selection_register(&mut self, button: i32) {
        self.register = SelectionRegister::from_button(button);
    }

    fn execute(&mut self, command: &Bytecode) -> Result<CommandOutcome, VmError> {
        self.executed.push(*command);
        if let Some(button) = self.register_writes.get(command) {
            self.register = SelectionRegister::from_button(*button);
        }
        self.outcomes
            .get(command)
            .cloned()
            .unwrap_or(Ok(CommandOutcome::NoOp))
    }

    fn advance_to_next_unit(&mut self) -> Result<(), VmError> {
        self.advanced += 1;
        Ok(())
    }

    fn hop_channel(&self) -> u32 {
        self.hop_channel
    }

    fn bump_hop_channel(&mut self) {
        self.hop_channel += 1;
    }
}

/// Two side-by-side buttons linked left/right.
pub fn two_button_menu() -> Arc<NavigationPacket> {
    let packet = NavigationPacket::new(vec![
        ButtonDescriptor::new(ButtonRect::new(0, 0, 100, 100))
            .with_links(ButtonLinks {
                right: 2,
                ..ButtonLinks::default()
            })
            .with_color_group(1)
            .with_command(LINK_TITLE_1),
        ButtonDescriptor::new(ButtonRect::new(101, 0, 200, 100))
            .with_links(ButtonLinks {
                left: 1,
                ..ButtonLinks::default()
            })
            .with_color_group(1)
            .with_command(SET_GPRM),
    ])
    .expect("valid packet")
    .with_colors(ColorTable::new([[0xa0, 0xb0], [0, 0], [0, 0]]))
    .with_timing(HighlightTiming {
        status: 1,
        start_pts: 3_600,
        ..HighlightTiming::default()
    });
    Arc::new(packet)
}

/// Vertical list where the bottom entry activates as soon as it is selected.
pub fn auto_action_menu() -> Arc<NavigationPacket> {
    let packet = NavigationPacket::new(vec![
        ButtonDescriptor::new(ButtonRect::new(0, 0, 100, 40)).with_links(
            ButtonLinks {
                down: 2,
                ..ButtonLinks::default()
            },
        ),
        ButtonDescriptor::new(ButtonRect::new(0, 50, 100, 90))
            .with_links(ButtonLinks {
                up: 1,
                ..ButtonLinks::default()
            })
            .with_auto_action(true)
            .with_command(LINK_TITLE_1),
    ])
    .expect("valid packet");
    Arc::new(packet)
}

pub fn empty_menu() -> Arc<NavigationPacket> {
    Arc::new(NavigationPacket::empty())
}
