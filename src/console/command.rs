//! Parsing of console input lines

/// One action typed at the practice console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start,
    Pause,
    Stop,
    Skip,
    Dismiss,
    Tempo(u32),
    Status,
    Help,
    Quit,
}

/// Parse one input line
///
/// Blank lines parse to `None`; anything unrecognized comes back as a hint
/// for the user rather than an error the loop would have to handle.
pub fn parse(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "start" | "play" => ConsoleCommand::Start,
        "pause" | "p" => ConsoleCommand::Pause,
        "stop" => ConsoleCommand::Stop,
        "skip" | "next" => ConsoleCommand::Skip,
        "dismiss" | "ok" => ConsoleCommand::Dismiss,
        "tempo" => {
            let value = words
                .next()
                .ok_or_else(|| "tempo needs a value, e.g. `tempo 120`".to_string())?;
            let bpm = value
                .parse::<u32>()
                .map_err(|_| format!("`{}` is not a tempo in bpm", value))?;
            if bpm == 0 {
                return Err("tempo must be above zero".to_string());
            }
            ConsoleCommand::Tempo(bpm)
        }
        "status" | "s" => ConsoleCommand::Status,
        "help" | "h" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        other => {
            return Err(format!(
                "unknown command `{}`; type `help` for the list",
                other
            ));
        }
    };

    Ok(Some(command))
}
