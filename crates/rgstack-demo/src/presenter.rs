//! Text and JSON-lines frame output.
//!
//! [`FramePrinter`] is the demo's [`Presenter`]: it builds a [`DemoCard`]
//! for every slot, optionally settles animated layouts along the configured
//! spring, and writes one record per frame.

use std::io::Write;
use std::time::Duration;

use rgstack::{
    Layout, LayoutAnimator, PlacedCard, Presenter, SLOT_COUNT, SpringCurve, StackConfiguration,
    place_cards,
};
use serde::Serialize;

use crate::card::{Color, Demo, DemoCard};
use crate::error::DemoError;

/// Simulated display refresh interval.
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Frames after which a spring that has not settled is abandoned.
const MAX_SETTLE_FRAMES: usize = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    JsonLines,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotRecord {
    pub slot: usize,
    pub text: String,
    pub color: Color,
    pub visible: bool,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub z_index: f64,
    pub opacity: f64,
    pub animated: bool,
}

impl SlotRecord {
    fn new(slot: usize, placed: &PlacedCard<DemoCard>) -> Self {
        let Demo { color, text } = placed.card.demo.clone();
        let layout = placed.layout;
        Self {
            slot,
            text,
            color,
            visible: !layout.is_hidden(),
            width: layout.size.width,
            height: layout.size.height,
            x: layout.offset.x,
            y: layout.offset.y,
            scale: layout.scale,
            z_index: layout.z_index,
            opacity: layout.opacity,
            animated: layout.animated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    /// Display frames the animated slots took to settle, if any animated.
    pub settle_frames: Option<usize>,
    pub slots: Vec<SlotRecord>,
}

/// Writes every presented frame to `out`.
///
/// Write errors are held until [`finish`](FramePrinter::finish), since
/// [`Presenter::present`] cannot fail.
pub struct FramePrinter<W: Write> {
    out: W,
    format: OutputFormat,
    animators: Option<Vec<LayoutAnimator>>,
    curve: SpringCurve,
    frames: usize,
    error: Option<DemoError>,
}

impl<W: Write> FramePrinter<W> {
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            animators: None,
            curve: SpringCurve::default(),
            frames: 0,
            error: None,
        }
    }

    /// Simulate springs for animated layouts and report how long they took.
    #[must_use]
    pub fn with_settling(mut self, curve: SpringCurve) -> Self {
        self.curve = curve;
        self.animators = Some(Vec::new());
        self
    }

    /// Frames presented so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush output and surface the first write error, if any.
    pub fn finish(mut self) -> Result<usize, DemoError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.out.flush()?;
        Ok(self.frames)
    }

    fn settle(&mut self, layouts: [Layout; SLOT_COUNT]) -> Option<usize> {
        let curve = self.curve;
        let animators = self.animators.as_mut()?;
        if animators.is_empty() {
            animators.extend(layouts.iter().map(|l| LayoutAnimator::new(*l, curve)));
            return None;
        }
        for (animator, layout) in animators.iter_mut().zip(layouts) {
            animator.retarget(layout);
        }
        if !animators.iter().any(LayoutAnimator::is_animating) {
            return None;
        }
        let mut ticks = 0;
        while ticks < MAX_SETTLE_FRAMES && animators.iter().any(LayoutAnimator::is_animating) {
            for animator in animators.iter_mut() {
                animator.tick(FRAME_INTERVAL);
            }
            ticks += 1;
        }
        Some(ticks)
    }

    fn write_record(&mut self, record: &FrameRecord) -> Result<(), DemoError> {
        match self.format {
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                match record.settle_frames {
                    Some(n) => {
                        writeln!(self.out, "frame {} (settled in {n} frames)", record.frame)?
                    }
                    None => writeln!(self.out, "frame {}", record.frame)?,
                }
                for s in &record.slots {
                    if !s.visible {
                        writeln!(self.out, "  [{}] {:>4} {:<6} hidden", s.slot, s.text, s.color)?;
                        continue;
                    }
                    writeln!(
                        self.out,
                        "  [{}] {:>4} {:<6} {:>5.1}x{:<5.1} @ ({:>6.1}, {:>6.1}) scale {:.3} z {:>5.1} opacity {:.2}{}",
                        s.slot,
                        s.text,
                        s.color,
                        s.width,
                        s.height,
                        s.x,
                        s.y,
                        s.scale,
                        s.z_index,
                        s.opacity,
                        if s.animated { " animated" } else { "" },
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> Presenter<Demo> for FramePrinter<W> {
    fn present(&mut self, configuration: &StackConfiguration<'_, Demo>) {
        let placed = place_cards::<DemoCard>(configuration);
        let settle_frames = self.settle(placed.each_ref().map(|p| p.layout));
        let record = FrameRecord {
            frame: self.frames,
            settle_frames,
            slots: placed
                .iter()
                .enumerate()
                .map(|(slot, p)| SlotRecord::new(slot, p))
                .collect(),
        };
        self.frames += 1;
        if self.error.is_none()
            && let Err(error) = self.write_record(&record)
        {
            tracing::warn!(message = "demo.write_failed", %error);
            self.error = Some(error);
        }
    }
}
