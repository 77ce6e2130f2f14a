//! Gesture scripts.
//!
//! A script is a list of steps, one per command-line argument:
//!
//! | Step        | Meaning                                      |
//! |-------------|----------------------------------------------|
//! | `appear`    | the view appeared                            |
//! | `drag:<dy>` | pan moved to vertical offset `dy` points     |
//! | `end:<dy>`  | pan released at vertical offset `dy` points  |
//! | `next`      | programmatic move to the next card           |
//! | `back`      | programmatic move to the previous card       |
//!
//! Negative `dy` drags up, toward the next card.

use std::str::FromStr;

use rgstack::{
    Direction, DragEvent, DragOutcome, Presenter, StackDriver, TransitionFeedback, Translation,
};

use crate::error::DemoError;

/// Script used when none is given: a short drag that snaps back, a commit
/// forward, a commit back, and two programmatic moves.
pub const DEFAULT_SCRIPT: &[&str] = &[
    "appear",
    "drag:-40",
    "drag:-80",
    "end:-80",
    "drag:-150",
    "drag:-300",
    "end:-300",
    "drag:120",
    "end:200",
    "next",
    "next",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Event(DragEvent),
    Move(Direction),
}

/// What running one step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Handled,
    Released(DragOutcome),
    Moved(bool),
}

impl Step {
    pub fn run<D, P, F>(self, driver: &mut StackDriver<D, P, F>) -> StepResult
    where
        P: Presenter<D>,
        F: TransitionFeedback,
    {
        match self {
            Self::Event(event) => match driver.handle(event) {
                Some(outcome) => StepResult::Released(outcome),
                None => StepResult::Handled,
            },
            Self::Move(direction) => StepResult::Moved(driver.move_to(direction)),
        }
    }
}

fn parse_offset(step: &str, value: &str) -> Result<Translation, DemoError> {
    let dy: f64 = value
        .parse()
        .map_err(|_| DemoError::invalid_step(step, format!("{value:?} is not a number")))?;
    if !dy.is_finite() {
        return Err(DemoError::invalid_step(step, "offset must be finite"));
    }
    Ok(Translation::vertical(dy))
}

impl FromStr for Step {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let step = s.trim();
        match step.split_once(':') {
            Some(("drag", value)) => {
                Ok(Self::Event(DragEvent::Changed(parse_offset(step, value)?)))
            }
            Some(("end", value)) => Ok(Self::Event(DragEvent::Ended(parse_offset(step, value)?))),
            Some((name, _)) => Err(DemoError::invalid_step(
                step,
                format!("{name:?} takes no argument or is unknown"),
            )),
            None => match step {
                "appear" => Ok(Self::Event(DragEvent::Appeared)),
                "next" => Ok(Self::Move(Direction::Next)),
                "back" => Ok(Self::Move(Direction::Back)),
                _ => Err(DemoError::invalid_step(step, "unknown step")),
            },
        }
    }
}

/// Parse every step, or the default script when `steps` is empty.
pub fn parse_script<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>, DemoError> {
    if steps.is_empty() {
        return DEFAULT_SCRIPT.iter().map(|s| s.parse()).collect();
    }
    steps.iter().map(|s| s.as_ref().parse()).collect()
}
