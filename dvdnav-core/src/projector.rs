use dvdnav_model::area::HighlightArea;
use dvdnav_model::packet::NavigationPacket;
use tracing::trace;

use crate::error::{NavError, Result};

/// Map `button` to its renderable highlight.
///
/// `mode` picks the color-group column (0 = selected, 1 = activated). It is
/// only checked for bounds: anything the table cannot index yields palette 0.
pub fn project(
    packet: &NavigationPacket,
    button: i32,
    mode: u8,
) -> Result<HighlightArea> {
    let descriptor = packet
        .button_raw(button)
        .ok_or(NavError::InvalidButton(button))?;

    let rect = descriptor.rect;
    let area = HighlightArea {
        sx: rect.x_start,
        sy: rect.y_start,
        ex: rect.x_end,
        ey: rect.y_end,
        palette: packet.colors.lookup(descriptor.color_group, mode),
        pts: packet.highlight_start_pts(),
        button,
    };

    trace!(
        "highlight area for button {} is ({},{})-({},{})",
        button, area.sx, area.sy, area.ex, area.ey
    );
    Ok(area)
}
