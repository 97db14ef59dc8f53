//! Line-mode countdown.
//!
//! Runs a session on the current task, reading commands from stdin while
//! the countdown prints to stdout.

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::args::StartArgs;
use crate::config::Config;
use crate::error::DawdleError;
use crate::output::ConsolePresenter;
use crate::timer::{format_mmss, Command, Minutes, MemoryLog, Mode, Scheduler, Session};

/// One parsed stdin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineInput {
    /// Forward to the session.
    Command(Command),
    /// Leave line mode.
    Quit,
}

/// Parse a line-mode command such as `snooze`, `z`, or `start 10`.
///
/// `fallback` is used when start/beg come without minutes.
#[must_use]
pub fn parse_line(line: &str, fallback: Minutes) -> Option<LineInput> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_lowercase();
    let minutes = words.next().map_or(fallback, Minutes::parse);

    let input = match verb.as_str() {
        "start" | "s" => LineInput::Command(Command::Start(minutes)),
        "beg" | "b" => LineInput::Command(Command::Beg(minutes)),
        "snooze" | "z" => LineInput::Command(Command::Snooze),
        "reset" | "r" => LineInput::Command(Command::Reset),
        "restart" | "n" => LineInput::Command(Command::Restart),
        "quit" | "q" | "exit" => LineInput::Quit,
        _ => return None,
    };
    Some(input)
}

/// Execute the start command.
///
/// Returns a one-line summary once time is up (or on quit).
///
/// # Errors
///
/// Returns an error if reading stdin fails.
pub async fn start(config: &Config, args: &StartArgs) -> Result<String, DawdleError> {
    let fallback = config.timer.default_minutes();
    let minutes = args.minutes.as_deref().map_or(fallback, Minutes::parse);

    let (scheduler, mut wakes) = Scheduler::channel();
    let presenter = ConsolePresenter::stdout(config.timer.sound);
    let mut session = Session::new(scheduler, presenter, MemoryLog::default())
        .with_restart(config.timer.restart_behavior());

    session.apply(if args.beg {
        Command::Beg(minutes)
    } else {
        Command::Start(minutes)
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        if session.mode() == Mode::Finished && !args.stay {
            break;
        }
        // Nothing left that could wake us.
        if !stdin_open && matches!(session.mode(), Mode::Idle | Mode::Finished) {
            break;
        }

        tokio::select! {
            Some(wake) = wakes.recv() => session.wake(wake),
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => match parse_line(&line, fallback) {
                    Some(LineInput::Quit) => break,
                    Some(LineInput::Command(command)) => session.apply(command),
                    None if line.trim().is_empty() => {}
                    None => {
                        session.presenter_mut().finish_line();
                        eprintln!("{} {}", "Unknown command:".yellow(), line.trim());
                    }
                },
                None => {
                    debug!("stdin closed");
                    stdin_open = false;
                }
            },
        }
    }

    session.presenter_mut().finish_line();
    Ok(summary(session.mode(), session.remaining_seconds(), &session.log().messages()))
}

fn summary(mode: Mode, remaining_seconds: u64, messages: &[&str]) -> String {
    let excuses = messages.iter().filter(|m| m.starts_with("Excuse: ")).count();
    let excuses = format!("{excuses} excuse{}", if excuses == 1 { "" } else { "s" });

    match mode {
        Mode::Finished => format!("Done, after {excuses}."),
        _ if remaining_seconds > 0 => format!(
            "Stopped with {} left, after {excuses}.",
            format_mmss(remaining_seconds)
        ),
        _ => format!("Stopped, after {excuses}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Minutes = Minutes::MIN;

    #[test]
    fn test_parse_verbs_and_aliases() {
        assert_eq!(
            parse_line("snooze", ONE),
            Some(LineInput::Command(Command::Snooze))
        );
        assert_eq!(parse_line("z", ONE), Some(LineInput::Command(Command::Snooze)));
        assert_eq!(parse_line("R", ONE), Some(LineInput::Command(Command::Reset)));
        assert_eq!(
            parse_line("restart", ONE),
            Some(LineInput::Command(Command::Restart))
        );
        assert_eq!(parse_line("  q  ", ONE), Some(LineInput::Quit));
    }

    #[test]
    fn test_parse_start_minutes() {
        assert_eq!(
            parse_line("start 10", ONE),
            Some(LineInput::Command(Command::Start(Minutes::new(10))))
        );
        assert_eq!(
            parse_line("b 2.5", ONE),
            Some(LineInput::Command(Command::Beg(Minutes::new(2))))
        );
        assert_eq!(
            parse_line("start", Minutes::new(7)),
            Some(LineInput::Command(Command::Start(Minutes::new(7))))
        );
        assert_eq!(
            parse_line("start whenever", Minutes::new(7)),
            Some(LineInput::Command(Command::Start(Minutes::MIN)))
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_line("", ONE), None);
        assert_eq!(parse_line("dance", ONE), None);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(Mode::Finished, 0, &["Ready.", "Excuse: x", "Excuse: y"]),
            "Done, after 2 excuses."
        );
        assert_eq!(
            summary(Mode::Counting, 90, &["Ready."]),
            "Stopped with 01:30 left, after 0 excuses."
        );
        assert_eq!(
            summary(Mode::Idle, 0, &["Excuse: x"]),
            "Stopped, after 1 excuse."
        );
    }
}
