use dvdnav_model::button::Direction;
use dvdnav_model::ids::ButtonIndex;
use dvdnav_model::packet::NavigationPacket;

/// Where a directional input leads from the current button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The link is 0: keep the current selection.
    Stay,
    Move {
        button: ButtonIndex,
        /// The target activates as soon as it is selected.
        auto_action: bool,
    },
}

/// Follow the author-encoded link of `current` in `direction`.
///
/// Returns `None` when `current` is not a button of `packet`. The link value
/// is returned verbatim, so a link past the end of the table comes back as a
/// `Move` that selection will reject.
pub fn resolve_direction(
    packet: &NavigationPacket,
    current: i32,
    direction: Direction,
) -> Option<Neighbor> {
    let button = packet.button_raw(current)?;

    let Some(target) = ButtonIndex::new(u16::from(button.link(direction)))
    else {
        return Some(Neighbor::Stay);
    };

    let auto_action = packet
        .button(target)
        .map(|neighbor| neighbor.auto_action)
        .unwrap_or(false);

    Some(Neighbor::Move {
        button: target,
        auto_action,
    })
}
