/// Number of color groups a packet can carry.
pub const COLOR_GROUPS: usize = 3;

/// Per-packet button color table: three groups, each with a "selected" and an
/// "activated" color/contrast word. A zero word means "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTable {
    pub groups: [[u32; 2]; COLOR_GROUPS],
}

impl ColorTable {
    pub fn new(groups: [[u32; 2]; COLOR_GROUPS]) -> Self {
        Self { groups }
    }

    /// Palette for a 1-based color group and a raw mode index.
    ///
    /// Group 0 and anything out of range resolve to 0.
    pub fn lookup(&self, color_group: u8, mode: u8) -> u32 {
        let Some(slot) = usize::from(color_group).checked_sub(1) else {
            return 0;
        };
        self.groups
            .get(slot)
            .and_then(|entry| entry.get(usize::from(mode)))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().flatten().all(|word| *word == 0)
    }
}
