//! Human-readable output.

use std::fmt::Write;

use colored::Colorize;

use crate::timer::Controls;

/// Format the excuse list as a numbered list
#[must_use]
pub fn format_excuses_pretty(excuses: &[&str]) -> String {
    if excuses.is_empty() {
        return "Excuses (0 items)\n  No excuses. Suspicious.".to_string();
    }

    let mut output = format!("Excuses ({} items)\n", excuses.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (i, excuse) in excuses.iter().enumerate() {
        let number = format!("{:>2}.", i + 1);
        writeln!(output, "{} {}", number.dimmed(), excuse.italic()).ok();
    }

    output
}

/// The commands line mode currently accepts, e.g. `snooze (z) · reset (r)`.
#[must_use]
pub fn controls_hint(controls: Controls) -> String {
    let mut parts = Vec::new();

    if controls.start {
        parts.push("start [min] (s)");
    }
    if controls.beg {
        parts.push("beg [min] (b)");
    }
    if controls.snooze {
        parts.push("snooze (z)");
    }
    if controls.reset {
        parts.push("reset (r)");
    }
    if controls.restart {
        parts.push("restart (n)");
    }
    parts.push("quit (q)");

    parts.join(" · ")
}
