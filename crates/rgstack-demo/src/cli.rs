use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use rgstack::{DragOutcome, RecordingFeedback, RgStack, StackConfig, StackDriver};

use crate::card::{sample_card_info, sample_deck};
use crate::error::Result;
use crate::presenter::{FramePrinter, OutputFormat};
use crate::script::{StepResult, parse_script};

/// Largest deck the demo will build.
pub const MAX_CARDS: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(
    name = "rgstack-demo",
    about = "Replay a drag gesture script against a sample RGStack deck",
    version
)]
pub struct Cli {
    /// Number of sample cards in the deck (1 to 10000).
    #[arg(
        long,
        default_value_t = 11,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CARDS)
    )]
    pub cards: usize,

    /// Stack configuration file (`.toml` or `.json`).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit one JSON object per frame instead of text.
    #[arg(long)]
    pub json: bool,

    /// Simulate springs for animated layouts and report settle time.
    #[arg(long)]
    pub settle: bool,

    /// Script steps: appear, drag:<dy>, end:<dy>, next, back.
    /// Runs a built-in script when omitted.
    pub steps: Vec<String>,
}

/// Totals printed after the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub index: usize,
    pub len: usize,
    pub commits: usize,
    pub rejected: usize,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run(cli, &mut out)?;
    tracing::info!(
        message = "demo.finished",
        frames = summary.frames,
        index = summary.index,
        len = summary.len,
        commits = summary.commits,
        rejected = summary.rejected
    );
    Ok(())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<Summary> {
    let steps = parse_script(cli.steps.as_slice())?;
    let config = match &cli.config {
        Some(path) => StackConfig::from_file(path)?,
        None => StackConfig::with_card(sample_card_info()),
    };
    let stack = RgStack::from_config(sample_deck(cli.cards), &config)?;
    tracing::debug!(
        message = "demo.start",
        cards = cli.cards,
        steps = steps.len(),
        threshold = config.snap_threshold
    );

    let format = if cli.json {
        OutputFormat::JsonLines
    } else {
        OutputFormat::Text
    };
    let mut printer = FramePrinter::new(&mut *out, format);
    if cli.settle {
        printer = printer.with_settling(config.animation);
    }

    let mut driver = StackDriver::with_feedback(stack, printer, RecordingFeedback::new());
    driver.refresh();
    let mut rejected = 0;
    for step in steps {
        match step.run(&mut driver) {
            StepResult::Released(DragOutcome::Rejected(_)) | StepResult::Moved(false) => {
                rejected += 1;
            }
            _ => {}
        }
    }

    let (stack, printer, feedback) = driver.into_parts();
    let frames = printer.finish()?;
    let summary = Summary {
        frames,
        index: stack.index(),
        len: stack.len(),
        commits: feedback.count(),
        rejected,
    };
    if !cli.json {
        writeln!(
            out,
            "card {} of {} after {} commits ({} rejected moves)",
            summary.index + 1,
            summary.len,
            summary.commits,
            summary.rejected
        )?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rgstack-demo").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn default_script_runs() {
        let mut out = Vec::new();
        let summary = run(cli(&[]), &mut out).expect("run");
        // Initial frame plus one per step.
        assert_eq!(summary.frames, crate::script::DEFAULT_SCRIPT.len() + 1);
        assert_eq!(summary.len, 11);
        // Snap back, commit next, commit back, then next twice.
        assert_eq!(summary.commits, 2);
        assert_eq!(summary.index, 2);
        assert_eq!(summary.rejected, 0);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with("card 3 of 11 after 2 commits (0 rejected moves)\n"), "{text}");
    }

    #[test]
    fn hyphenated_steps_parse_as_positionals() {
        let parsed = cli(&["--cards", "2", "drag:-10", "end:-400", "next"]);
        assert_eq!(parsed.cards, 2);
        assert_eq!(parsed.steps, vec!["drag:-10", "end:-400", "next"]);

        let mut out = Vec::new();
        let summary = run(parsed, &mut out).expect("run");
        assert_eq!(summary.index, 1);
        assert_eq!(summary.commits, 1);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn json_output_has_no_summary_line() {
        let mut out = Vec::new();
        run(cli(&["--json", "--cards", "3", "next"]), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.starts_with('{')));
    }

    #[test]
    fn config_file_sets_threshold() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("stack.toml");
        std::fs::write(&path, "snap_threshold = 0.9\n").expect("write config");
        let mut out = Vec::new();
        let summary = run(
            cli(&["--config", path.to_str().expect("utf8 path"), "end:-400"]),
            &mut out,
        )
        .expect("run");
        // 400 / (480 + 50) is below 0.9.
        assert_eq!(summary.index, 0);
        assert_eq!(summary.commits, 0);
    }

    #[test]
    fn card_count_is_bounded() {
        for cards in ["0", "10001", "18446744073709551615", "-3"] {
            let parsed = Cli::try_parse_from(["rgstack-demo", "--cards", cards]);
            assert!(parsed.is_err(), "--cards {cards} accepted");
        }
        assert_eq!(cli(&["--cards", "10000"]).cards, 10_000);
        assert_eq!(cli(&["--cards", "1"]).cards, 1);
    }

    #[test]
    fn empty_deck_is_an_error() {
        let cli = Cli {
            cards: 0,
            config: None,
            json: false,
            settle: false,
            steps: Vec::new(),
        };
        let err = run(cli, &mut Vec::new()).expect_err("empty deck");
        assert!(matches!(err, DemoError::Stack(_)));
    }

    #[test]
    fn bad_step_is_a_usage_error() {
        let err = run(cli(&["sideways"]), &mut Vec::new()).expect_err("bad step");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn settle_flag_reports_settle_time() {
        let mut out = Vec::new();
        run(cli(&["--settle", "--cards", "3", "next"]), &mut out).expect("run");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("settled in"), "{text}");
    }
}
