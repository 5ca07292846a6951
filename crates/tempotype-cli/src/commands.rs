//! Command handlers. Each returns the text to print.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use tempotype::display::word_count_label;
use tempotype::{render, StyleResolver, TierTable, TypingDisplay, TypingMeter};

use crate::cli::{Command, RenderArgs};

pub fn run(command: Command) -> Result<String> {
    match command {
        Command::Render(args) => run_render(args),
        Command::Count { text } => Ok(word_count_label(tempotype::display::word_count(&text))),
        Command::Tiers { tiers } => {
            let table = load_tiers(tiers.as_deref())?;
            table.to_yaml().context("failed to serialize tier table")
        }
    }
}

fn load_tiers(path: Option<&Path>) -> Result<TierTable> {
    match path {
        Some(path) => TierTable::from_file(path)
            .with_context(|| format!("failed to load tiers from {}", path.display())),
        None => Ok(TierTable::default()),
    }
}

fn run_render(args: RenderArgs) -> Result<String> {
    let table = load_tiers(args.tiers.as_deref())?;
    let resolver = StyleResolver::new(table).context("invalid tier table")?;
    let mut display = TypingDisplay::new(resolver);

    let speed = match &args.keystrokes {
        Some(times) => {
            let mut meter = TypingMeter::default();
            for ms in times {
                meter.record(Duration::from_millis(*ms));
            }
            debug!(keystrokes = times.len(), speed = meter.speed(), "measured typing speed");
            meter.speed()
        }
        None => args.speed,
    };

    display.set_speed(speed);
    display.handle_input(args.text);
    render(display.chars(), args.output)
        .with_context(|| format!("failed to render {} output", args.output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempotype::OutputMode;

    fn render_args(text: &str, speed: f64, output: OutputMode) -> RenderArgs {
        RenderArgs {
            text: text.to_string(),
            speed,
            keystrokes: None,
            tiers: None,
            output,
        }
    }

    #[test]
    fn test_render_text() {
        let out = run(Command::Render(render_args("hi there", 9.0, OutputMode::Text))).unwrap();
        assert_eq!(out, "hi there");
    }

    #[test]
    fn test_render_json_uses_speed() {
        let out = run(Command::Render(render_args("d", 20.0, OutputMode::Json))).unwrap();
        assert!(out.contains("\"fontWeight\": 700"));
        assert!(out.contains("scale(1.05)"));
    }

    #[test]
    fn test_render_keystrokes_measure_speed() {
        let mut args = render_args("abc", 0.0, OutputMode::Json);
        // 4 strokes over 0.3s: 10 chars/sec, the 600 tier
        args.keystrokes = Some(vec![0, 100, 200, 300]);
        let out = run(Command::Render(args)).unwrap();
        assert!(out.contains("\"fontWeight\": 600"));
    }

    #[test]
    fn test_count() {
        let out = run(Command::Count {
            text: "Hello World".into(),
        })
        .unwrap();
        assert_eq!(out, "02");
    }

    #[test]
    fn test_tiers_default() {
        let out = run(Command::Tiers { tiers: None }).unwrap();
        assert!(out.contains("rgb(203, 213, 225)"));
    }

    #[test]
    fn test_custom_tiers_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tiers:").unwrap();
        writeln!(file, "  - weight: 700").unwrap();
        writeln!(file, "    color: \"rgb(1, 2, 3)\"").unwrap();

        let mut args = render_args("x", 1.0, OutputMode::Json);
        args.tiers = Some(file.path().to_path_buf());
        let out = run(Command::Render(args)).unwrap();
        assert!(out.contains("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_missing_tiers_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = run(Command::Tiers {
            tiers: Some(missing.clone()),
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("nope.yaml"));
    }
}
