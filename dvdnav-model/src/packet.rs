use crate::button::ButtonDescriptor;
use crate::color::ColorTable;
use crate::error::{ModelError, Result};
use crate::ids::ButtonIndex;

/// Button table capacity of a single packet.
pub const MAX_BUTTONS: usize = 36;

/// Presentation-time fields of the highlight block, carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightTiming {
    /// Highlight status bits (0 = no highlight information in this unit).
    pub status: u8,
    pub start_pts: u32,
    pub end_pts: u32,
    pub select_end_pts: u32,
}

/// Remaining general highlight fields. Data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightInfo {
    pub group_count: u8,
    pub group_display_types: [u8; 3],
    pub button_offset: u8,
    pub numeric_select_count: u8,
    pub forced_select: u8,
    pub forced_activate: u8,
}

/// Decoded per-unit highlight descriptor.
///
/// Immutable once built; sessions share it behind an `Arc` and swap the whole
/// packet when playback moves to a new unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationPacket {
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: HighlightTiming,
    #[cfg_attr(feature = "serde", serde(default))]
    pub info: HighlightInfo,
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: ColorTable,
    #[cfg_attr(feature = "serde", serde(default))]
    buttons: Vec<ButtonDescriptor>,
}

impl NavigationPacket {
    /// Build a packet from its buttons, numbered 1.. in the given order.
    pub fn new(buttons: Vec<ButtonDescriptor>) -> Result<Self> {
        let packet = Self {
            buttons,
            ..Self::default()
        };
        packet.validate()?;
        Ok(packet)
    }

    /// A packet without highlight information.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_timing(mut self, timing: HighlightTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_info(mut self, info: HighlightInfo) -> Result<Self> {
        self.info = info;
        self.validate()?;
        Ok(self)
    }

    /// Check structural invariants. Deserialized packets should be passed
    /// through here before use.
    pub fn validate(&self) -> Result<()> {
        if self.buttons.len() > MAX_BUTTONS {
            return Err(ModelError::InvalidPacket(format!(
                "{} buttons exceeds the table size of {MAX_BUTTONS}",
                self.buttons.len()
            )));
        }
        if self.info.group_count > 3 {
            return Err(ModelError::InvalidPacket(format!(
                "{} button groups, at most 3 allowed",
                self.info.group_count
            )));
        }
        for (slot, button) in self.buttons.iter().enumerate() {
            if !button.rect.is_well_formed() {
                return Err(ModelError::InvalidPacket(format!(
                    "button {} has an inverted rectangle {:?}",
                    slot + 1,
                    button.rect
                )));
            }
        }
        Ok(())
    }

    pub fn button_count(&self) -> u8 {
        // Bounded by MAX_BUTTONS through validate().
        self.buttons.len().min(MAX_BUTTONS) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn contains(&self, button: i32) -> bool {
        button >= 1 && button <= i32::from(self.button_count())
    }

    pub fn button(&self, index: ButtonIndex) -> Option<&ButtonDescriptor> {
        self.buttons.get(index.slot())
    }

    /// Look up a button by a raw register/link value.
    pub fn button_raw(&self, button: i32) -> Option<&ButtonDescriptor> {
        ButtonIndex::from_raw(button).and_then(|index| self.button(index))
    }

    pub fn buttons(
        &self,
    ) -> impl Iterator<Item = (ButtonIndex, &ButtonDescriptor)> {
        self.buttons.iter().enumerate().filter_map(|(slot, button)| {
            u16::try_from(slot + 1)
                .ok()
                .and_then(ButtonIndex::new)
                .map(|index| (index, button))
        })
    }

    pub fn highlight_start_pts(&self) -> u32 {
        self.timing.start_pts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonRect;

    #[test]
    fn rejects_oversized_tables() {
        let buttons = vec![ButtonDescriptor::default(); MAX_BUTTONS + 1];
        assert!(matches!(
            NavigationPacket::new(buttons),
            Err(ModelError::InvalidPacket(_))
        ));
    }

    #[test]
    fn rejects_inverted_rectangles() {
        let button = ButtonDescriptor::new(ButtonRect::new(10, 0, 5, 5));
        assert!(NavigationPacket::new(vec![button]).is_err());
    }

    #[test]
    fn indexes_are_one_based() {
        let packet = NavigationPacket::new(vec![
            ButtonDescriptor::new(ButtonRect::new(0, 0, 1, 1)),
            ButtonDescriptor::new(ButtonRect::new(2, 2, 3, 3)),
        ])
        .unwrap();
        assert_eq!(packet.button_count(), 2);
        assert!(!packet.contains(0));
        assert!(packet.contains(2));
        assert!(!packet.contains(3));
        assert_eq!(packet.button_raw(2).unwrap().rect.x_start, 2);
        let numbers: Vec<u16> =
            packet.buttons().map(|(index, _)| index.value()).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
