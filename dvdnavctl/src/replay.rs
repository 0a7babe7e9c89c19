use std::{fmt::Write as _, io::Write, sync::Arc};

use dvdnav_contracts::playback::StillFrameState;
use dvdnav_core::{
    DirectionOutcome, NavError, NavSession, SessionOptions, StillFlag,
};
use dvdnav_model::NavigationPacket;
use serde_json::{Value, json};
use tracing::debug;

use crate::{script::Step, vm::ScriptedVm};

/// Human-readable summary of a packet, one line per button.
pub fn describe_packet(packet: &NavigationPacket) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "highlight status {} | {} button(s) | {} group(s) | pts {}..{} (select until {})",
        packet.timing.status,
        packet.button_count(),
        packet.info.group_count,
        packet.timing.start_pts,
        packet.timing.end_pts,
        packet.timing.select_end_pts,
    );
    if packet.info.forced_select != 0 || packet.info.forced_activate != 0 {
        let _ = writeln!(
            out,
            "forced select {} | forced activate {}",
            packet.info.forced_select, packet.info.forced_activate
        );
    }
    for (index, button) in packet.buttons() {
        let rect = button.rect;
        let links = button.links;
        let _ = writeln!(
            out,
            "  #{index:<2} ({},{})-({},{}) links u{} d{} l{} r{} color {}{} {:?}",
            rect.x_start,
            rect.y_start,
            rect.x_end,
            rect.y_end,
            links.up,
            links.down,
            links.left,
            links.right,
            button.color_group,
            if button.auto_action { " auto" } else { "" },
            button.command,
        );
    }
    out
}

/// Drive a fresh session through `steps` and write one JSON object per step.
///
/// Navigation errors are reported in the step's record and the replay keeps
/// going, the same way a player ignores invalid input.
pub fn run_replay<W: Write>(
    packet: NavigationPacket,
    options: SessionOptions,
    steps: &[(usize, Step)],
    mut out: W,
) -> anyhow::Result<NavSession<ScriptedVm, StillFlag>> {
    let session =
        NavSession::with_options(ScriptedVm::new(), StillFlag::default(), options);
    session.install_packet(Arc::new(packet));

    for (line, step) in steps {
        debug!(line, ?step, "replaying step");
        let result = apply(&session, *step);
        let (status, button) = session.current_highlight();
        let record = json!({
            "line": line,
            "step": format!("{step:?}"),
            "result": result.unwrap_or_else(|err| json!({ "error": err.to_string() })),
            "status": status,
            "button": button,
            "hop_channel": session.hop_channel(),
            "still": session.with_playback(|flag| flag.is_paused_for_still()),
        });
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(session)
}

fn apply(
    session: &NavSession<ScriptedVm, StillFlag>,
    step: Step,
) -> Result<Value, NavError> {
    let value = match step {
        Step::Select(button) => {
            json!({ "selected": session.select_button(button)? })
        }
        Step::Move(direction) => match session.select_direction(direction)? {
            DirectionOutcome::Unchanged => json!({ "moved": Value::Null }),
            DirectionOutcome::Moved(button) => json!({ "moved": button }),
            DirectionOutcome::AutoActivated { button, activation } => {
                json!({ "moved": button, "activation": activation })
            }
        },
        Step::Point { x, y } => json!({ "hit": session.select_point(x, y)? }),
        Step::Click { x, y } => {
            json!({ "activation": session.activate_point(x, y)? })
        }
        Step::Activate => json!({ "activation": session.activate()? }),
        Step::Area(mode) => json!({ "area": session.current_highlight_area(mode) }),
        Step::Still(paused) => {
            session.with_playback(|flag| flag.set(paused));
            json!({ "still": paused })
        }
    };
    Ok(value)
}

/// Units the scripted VM was asked to skip during a replay.
pub fn units_advanced(session: &NavSession<ScriptedVm, StillFlag>) -> u32 {
    session.with_vm(|vm| vm.units_advanced())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use dvdnav_model::{
        ButtonDescriptor, ButtonLinks, ButtonRect, Bytecode, ColorTable,
    };

    fn menu() -> NavigationPacket {
        NavigationPacket::new(vec![
            ButtonDescriptor::new(ButtonRect::new(0, 0, 100, 100))
                .with_links(ButtonLinks {
                    right: 2,
                    ..ButtonLinks::default()
                })
                .with_color_group(1)
                .with_command(Bytecode([0x30, 0x02, 0, 0, 0, 1, 0, 0])),
            ButtonDescriptor::new(ButtonRect::new(200, 0, 300, 100))
                .with_links(ButtonLinks {
                    left: 1,
                    ..ButtonLinks::default()
                })
                .with_color_group(1),
        ])
        .unwrap()
        .with_colors(ColorTable::new([[0x11, 0x22], [0, 0], [0, 0]]))
    }

    fn replay(script: &str) -> (Vec<Value>, u32) {
        let steps = parse_script(script).unwrap();
        let mut out = Vec::new();
        let session =
            run_replay(menu(), SessionOptions::default(), &steps, &mut out)
                .unwrap();
        let records = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (records, units_advanced(&session))
    }

    #[test]
    fn walks_and_activates() {
        let (records, _) = replay("select 1\nright\nactivate\nleft\nactivate\n");

        assert_eq!(records[1]["result"]["moved"], 2);
        assert_eq!(records[2]["result"]["activation"]["caused_jump"], false);
        assert_eq!(records[2]["status"], "activated");
        assert_eq!(records[3]["button"], 1);
        assert_eq!(records[4]["result"]["activation"]["caused_jump"], true);
        assert_eq!(records[4]["hop_channel"], 1);
    }

    #[test]
    fn rejected_input_is_reported_inline() {
        let (records, _) = replay("up\nselect 9\n");

        assert!(records[0]["result"]["error"].is_string());
        assert!(records[1]["result"]["error"]
            .as_str()
            .unwrap()
            .contains('9'));
    }

    #[test]
    fn area_uses_the_color_table() {
        let (records, _) = replay("point 50 50\narea 1\n");

        assert_eq!(records[0]["result"]["hit"], 1);
        let area = &records[1]["result"]["area"];
        assert_eq!(area["palette"], 0x22);
        assert_eq!(area["ex"], 100);
    }

    #[test]
    fn still_is_released_without_a_selection() {
        let (records, advanced) = replay("still on\nclick 150 50\n");

        assert_eq!(records[1]["result"]["activation"]["kind"], "advanced_past_still");
        assert_eq!(records[1]["still"], false);
        assert_eq!(advanced, 1);
    }
}
