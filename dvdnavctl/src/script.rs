use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use dvdnav_model::Direction;

/// One line of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Select(i32),
    Move(Direction),
    Point { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    Activate,
    Area(u8),
    Still(bool),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty step");
        };
        let args: Vec<&str> = words.collect();

        let step = match (verb, args.as_slice()) {
            ("select", [button]) => Step::Select(parse_number(button)?),
            ("up", []) => Step::Move(Direction::Up),
            ("down", []) => Step::Move(Direction::Down),
            ("left", []) => Step::Move(Direction::Left),
            ("right", []) => Step::Move(Direction::Right),
            ("point", [x, y]) => Step::Point {
                x: parse_number(x)?,
                y: parse_number(y)?,
            },
            ("click", [x, y]) => Step::Click {
                x: parse_number(x)?,
                y: parse_number(y)?,
            },
            ("activate", []) => Step::Activate,
            ("area", [mode]) => Step::Area(parse_number(mode)?),
            ("still", ["on"]) => Step::Still(true),
            ("still", ["off"]) => Step::Still(false),
            _ => bail!("unrecognised step `{line}`"),
        };
        Ok(step)
    }
}

fn parse_number<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .map_err(|err| anyhow!("`{raw}` is not a valid number: {err}"))
}

/// Parse a script into `(line number, step)` pairs. Blank lines and `#`
/// comments are skipped.
pub fn parse_script(source: &str) -> anyhow::Result<Vec<(usize, Step)>> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            line.parse::<Step>()
                .map(|step| (line_no, step))
                .with_context(|| format!("script line {line_no}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        let script = "\
# menu walk
select 2
left
point 10 20
click 5 5   # confirm
area 1
still on
activate
";
        let steps = parse_script(script).unwrap();
        assert_eq!(
            steps,
            vec![
                (2, Step::Select(2)),
                (3, Step::Move(Direction::Left)),
                (4, Step::Point { x: 10, y: 20 }),
                (5, Step::Click { x: 5, y: 5 }),
                (6, Step::Area(1)),
                (7, Step::Still(true)),
                (8, Step::Activate),
            ]
        );
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = parse_script("up\njump 3\n").unwrap_err();
        let text = format!("{err:#}");
        assert!(text.contains("script line 2"), "{text}");
        assert!(text.contains("jump 3"), "{text}");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!("select one".parse::<Step>().is_err());
        assert!("point 1".parse::<Step>().is_err());
        assert!("still maybe".parse::<Step>().is_err());
        assert!("area 300".parse::<Step>().is_err());
    }
}
