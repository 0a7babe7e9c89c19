use crate::button::ButtonRect;

/// Tri-state highlight status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HighlightStatus {
    #[default]
    Disabled,
    Selected,
    Activated,
}

impl HighlightStatus {
    /// Palette column matching this status, if any highlight is shown.
    pub fn palette_mode(&self) -> Option<PaletteMode> {
        match self {
            HighlightStatus::Disabled => None,
            HighlightStatus::Selected => Some(PaletteMode::Selected),
            HighlightStatus::Activated => Some(PaletteMode::Activated),
        }
    }
}

/// Column of a color group used when rendering a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum PaletteMode {
    Selected = 0,
    Activated = 1,
}

impl PaletteMode {
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl From<PaletteMode> for u8 {
    fn from(mode: PaletteMode) -> Self {
        mode.index()
    }
}

/// Renderable snapshot of one button's highlight. Re-query after every
/// selection change; nothing here tracks later mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightArea {
    pub sx: u16,
    pub sy: u16,
    pub ex: u16,
    pub ey: u16,
    pub palette: u32,
    /// Highlight start PTS, for aligning the overlay with decoded video.
    pub pts: u32,
    pub button: i32,
}

impl HighlightArea {
    pub fn rect(&self) -> ButtonRect {
        ButtonRect::new(self.sx, self.sy, self.ex, self.ey)
    }
}
