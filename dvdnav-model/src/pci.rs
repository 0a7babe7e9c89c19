//! Highlight-information decoding for raw PCI navigation packets.
//!
//! ```text
//! 0x000  general information        60 bytes
//! 0x03c  non-seamless angle info    36 bytes
//! 0x060  highlight general info     22 bytes
//! 0x076  button color table         3 x 2 x u32
//! 0x08e  button table               36 x 18 bytes
//! ```
//!
//! All fields are big-endian and several are bit-packed. This is the only
//! place in the workspace that touches the on-disc layout; everything past
//! [`decode_pci`] works on [`NavigationPacket`].

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::button::{ButtonDescriptor, ButtonLinks, ButtonRect, Bytecode};
use crate::color::{COLOR_GROUPS, ColorTable};
use crate::error::{ModelError, Result};
use crate::packet::{
    HighlightInfo, HighlightTiming, MAX_BUTTONS, NavigationPacket,
};

/// Offset of the highlight block inside a PCI packet.
pub const HLI_OFFSET: usize = 0x60;

/// Size of one button table entry.
pub const BUTTON_ENTRY_SIZE: usize = 18;

const HL_GI_SIZE: usize = 22;
const COLOR_TABLE_SIZE: usize = COLOR_GROUPS * 2 * 4;

/// Minimum buffer length that holds the full button table.
pub const PCI_MIN_LEN: usize =
    HLI_OFFSET + HL_GI_SIZE + COLOR_TABLE_SIZE + MAX_BUTTONS * BUTTON_ENTRY_SIZE;

/// Decode the highlight block of a PCI packet (buffer starts at the packet's
/// general information, after the substream id).
pub fn decode_pci(buf: &[u8]) -> Result<NavigationPacket> {
    if buf.len() < PCI_MIN_LEN {
        return Err(ModelError::Truncated {
            needed: PCI_MIN_LEN,
            actual: buf.len(),
        });
    }

    let mut cursor = Cursor::new(&buf[HLI_OFFSET..]);
    let (timing, info, button_count) = read_general_info(&mut cursor)?;

    let mut groups = [[0u32; 2]; COLOR_GROUPS];
    for group in groups.iter_mut() {
        group[0] = cursor.read_u32::<BigEndian>()?;
        group[1] = cursor.read_u32::<BigEndian>()?;
    }

    if timing.status == 0 {
        return Ok(NavigationPacket::empty()
            .with_timing(timing)
            .with_colors(ColorTable::new(groups)));
    }

    if usize::from(button_count) > MAX_BUTTONS {
        return Err(ModelError::InvalidPacket(format!(
            "button count {button_count} exceeds {MAX_BUTTONS}"
        )));
    }

    let mut buttons = Vec::with_capacity(usize::from(button_count));
    for _ in 0..button_count {
        buttons.push(read_button(&mut cursor)?);
    }

    NavigationPacket::new(buttons)?
        .with_timing(timing)
        .with_colors(ColorTable::new(groups))
        .with_info(info)
}

fn read_general_info(
    cursor: &mut Cursor<&[u8]>,
) -> Result<(HighlightTiming, HighlightInfo, u8)> {
    let status = (cursor.read_u16::<BigEndian>()? & 0x03) as u8;
    let start_pts = cursor.read_u32::<BigEndian>()?;
    let end_pts = cursor.read_u32::<BigEndian>()?;
    let select_end_pts = cursor.read_u32::<BigEndian>()?;

    // 2 reserved, 2 group count, then three (1 reserved, 3 display type).
    let groups = cursor.read_u16::<BigEndian>()?;
    let group_count = ((groups >> 12) & 0x03) as u8;
    let group_display_types = [
        ((groups >> 8) & 0x07) as u8,
        ((groups >> 4) & 0x07) as u8,
        (groups & 0x07) as u8,
    ];

    let button_offset = cursor.read_u8()?;
    let button_count = cursor.read_u8()?;
    let numeric_select_count = cursor.read_u8()?;
    let _reserved = cursor.read_u8()?;
    let forced_select = cursor.read_u8()?;
    let forced_activate = cursor.read_u8()?;

    Ok((
        HighlightTiming {
            status,
            start_pts,
            end_pts,
            select_end_pts,
        },
        HighlightInfo {
            group_count,
            group_display_types,
            button_offset,
            numeric_select_count,
            forced_select,
            forced_activate,
        },
        button_count,
    ))
}

fn read_button(cursor: &mut Cursor<&[u8]>) -> Result<ButtonDescriptor> {
    // 2 color group, 10 x start, 2 reserved, 10 x end
    let x_bits = cursor.read_u24::<BigEndian>()?;
    // 2 auto action, 10 y start, 2 reserved, 10 y end
    let y_bits = cursor.read_u24::<BigEndian>()?;

    let mut link_bytes = [0u8; 4];
    cursor.read_exact(&mut link_bytes)?;
    let mut command = [0u8; Bytecode::LEN];
    cursor.read_exact(&mut command)?;

    let rect = ButtonRect::new(
        ((x_bits >> 12) & 0x3ff) as u16,
        ((y_bits >> 12) & 0x3ff) as u16,
        (x_bits & 0x3ff) as u16,
        (y_bits & 0x3ff) as u16,
    );

    Ok(ButtonDescriptor {
        rect,
        links: ButtonLinks {
            up: link_bytes[0] & 0x3f,
            down: link_bytes[1] & 0x3f,
            left: link_bytes[2] & 0x3f,
            right: link_bytes[3] & 0x3f,
        },
        color_group: ((x_bits >> 22) & 0x03) as u8,
        auto_action: ((y_bits >> 22) & 0x03) == 1,
        command: Bytecode(command),
    })
}
