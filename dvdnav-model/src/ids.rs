use std::num::NonZeroU16;

/// 1-based button number inside a navigation packet.
///
/// Discs number buttons from 1; the value 0 is reserved for "no button" and
/// cannot be represented by this type. Use [`ButtonIndex::from_raw`] to turn a
/// register or link value into an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct ButtonIndex(NonZeroU16);

impl ButtonIndex {
    pub fn new(number: u16) -> Option<Self> {
        NonZeroU16::new(number).map(ButtonIndex)
    }

    /// Interpret a signed register/link value; zero and negatives are "none".
    pub fn from_raw(raw: i32) -> Option<Self> {
        u16::try_from(raw).ok().and_then(Self::new)
    }

    pub fn value(&self) -> u16 {
        self.0.get()
    }

    pub fn as_i32(&self) -> i32 {
        i32::from(self.0.get())
    }

    /// Zero-based slot in the packet's button table.
    pub fn slot(&self) -> usize {
        usize::from(self.0.get()) - 1
    }
}

impl std::fmt::Display for ButtonIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ButtonIndex> for u16 {
    fn from(index: ButtonIndex) -> Self {
        index.value()
    }
}

impl TryFrom<u16> for ButtonIndex {
    type Error = String;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        ButtonIndex::new(number)
            .ok_or_else(|| "button numbers start at 1".to_string())
    }
}
