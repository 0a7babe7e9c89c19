use dvdnav_model::ids::ButtonIndex;
use dvdnav_model::packet::NavigationPacket;

/// Button under the pointer at `(x, y)`.
///
/// When boxes overlap, the one whose center is nearest wins; exact ties go to
/// the lowest button number. `None` means no box contains the point.
pub fn resolve_point(
    packet: &NavigationPacket,
    x: i32,
    y: i32,
) -> Option<ButtonIndex> {
    let mut best: Option<(ButtonIndex, i64)> = None;

    for (index, button) in packet.buttons() {
        if !button.rect.contains(x, y) {
            continue;
        }
        let (cx, cy) = button.rect.center();
        let dx = i64::from(cx) - i64::from(x);
        let dy = i64::from(cy) - i64::from(y);
        let distance = dx * dx + dy * dy;

        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvdnav_model::button::{ButtonDescriptor, ButtonRect};

    fn packet(rects: &[(u16, u16, u16, u16)]) -> NavigationPacket {
        NavigationPacket::new(
            rects
                .iter()
                .map(|&(sx, sy, ex, ey)| {
                    ButtonDescriptor::new(ButtonRect::new(sx, sy, ex, ey))
                })
                .collect(),
        )
        .unwrap()
    }

    fn hit(packet: &NavigationPacket, x: i32, y: i32) -> Option<u16> {
        resolve_point(packet, x, y).map(|index| index.value())
    }

    #[test]
    fn single_box_hits() {
        let packet = packet(&[(0, 0, 100, 100), (101, 0, 200, 100)]);
        assert_eq!(hit(&packet, 50, 50), Some(1));
        assert_eq!(hit(&packet, 150, 50), Some(2));
        assert_eq!(hit(&packet, 300, 300), None);
    }

    #[test]
    fn edges_count_as_inside() {
        let packet = packet(&[(10, 10, 20, 20)]);
        assert_eq!(hit(&packet, 10, 10), Some(1));
        assert_eq!(hit(&packet, 20, 20), Some(1));
        assert_eq!(hit(&packet, 21, 20), None);
        assert_eq!(hit(&packet, 9, 15), None);
    }

    #[test]
    fn overlap_prefers_nearest_center() {
        // centers at (50, 50) and (70, 50)
        let packet = packet(&[(0, 0, 100, 100), (40, 0, 100, 100)]);
        assert_eq!(hit(&packet, 45, 50), Some(1));
        assert_eq!(hit(&packet, 65, 50), Some(2));
    }

    #[test]
    fn exact_tie_keeps_lowest_index() {
        let packet = packet(&[(0, 0, 100, 100), (0, 0, 100, 100)]);
        assert_eq!(hit(&packet, 30, 30), Some(1));

        // centers (40, 50) and (60, 50), equidistant from x = 50
        let packet = packet_pair();
        assert_eq!(hit(&packet, 50, 50), Some(1));
    }

    fn packet_pair() -> NavigationPacket {
        packet(&[(0, 0, 80, 100), (20, 0, 100, 100)])
    }

    #[test]
    fn empty_packet_never_hits() {
        assert_eq!(hit(&NavigationPacket::empty(), 0, 0), None);
    }
}
