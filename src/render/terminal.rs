// file: src/render/terminal.rs
// description: terminal display surface drawing lanes as colored text frames
// reference: uses colored for border markers, mirrors the lane board state

use crate::models::{Lane, Signal, Step};
use crate::render::surface::{DisplaySurface, LaneBoard};
use colored::Colorize;
use std::io::{self, Write};
use tracing::warn;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const MISSING: &str = "-";

pub struct TerminalBoard<W: Write> {
    board: LaneBoard,
    out: W,
    color: bool,
    clear: bool,
}

impl TerminalBoard<io::Stdout> {
    /// Full-screen board that redraws in place on every frame.
    pub fn stdout(lane_count: usize, color: bool) -> Self {
        Self {
            board: LaneBoard::new(lane_count),
            out: io::stdout(),
            color,
            clear: true,
        }
    }
}

impl<W: Write> TerminalBoard<W> {
    /// Append-only board writing frames one after another to `out`.
    pub fn with_writer(lane_count: usize, out: W, color: bool) -> Self {
        Self {
            board: LaneBoard::new(lane_count),
            out,
            color,
            clear: false,
        }
    }

    pub fn board(&self) -> &LaneBoard {
        &self.board
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn frame(&self) -> String {
        let mut frame = String::new();

        let raw_step = self.board.step_marker().unwrap_or(MISSING);
        let phase = Step::parse(raw_step)
            .map(Step::label)
            .unwrap_or("unknown phase");
        let header = format!(
            "step {} ({}) at {}",
            raw_step,
            phase,
            chrono::Local::now().format("%H:%M:%S")
        );
        if self.color {
            frame.push_str(&header.bold().to_string());
        } else {
            frame.push_str(&header);
        }
        frame.push('\n');

        for lane in self.board.lanes() {
            frame.push_str(&self.lane_line(lane));
            frame.push('\n');
        }

        frame
    }

    fn lane_line(&self, lane: &Lane) -> String {
        let marker = match lane.border {
            Some(border) => {
                let name = format!("{:<6}", border.signal.css_name());
                if self.color {
                    paint(border.signal, &format!("■ {}", name))
                } else {
                    format!("■ {}", name)
                }
            }
            None => format!("□ {:<6}", "none"),
        };

        format!(
            "[{}] {}  count {:>6}  flow {:>6}  speed {:>6}",
            lane.name,
            marker,
            lane.count.as_deref().unwrap_or(MISSING),
            lane.flow.as_deref().unwrap_or(MISSING),
            lane.speed.as_deref().unwrap_or(MISSING),
        )
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let frame = self.frame();
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

/// Bold text in the color of `signal`.
pub fn paint(signal: Signal, text: &str) -> String {
    match signal {
        Signal::Red => text.red().bold().to_string(),
        Signal::Yellow => text.yellow().bold().to_string(),
        Signal::Green => text.green().bold().to_string(),
    }
}

impl<W: Write> DisplaySurface for TerminalBoard<W> {
    fn lane_count(&self) -> usize {
        self.board.lane_count()
    }

    fn lane_mut(&mut self, index: usize) -> Option<&mut Lane> {
        self.board.lane_mut(index)
    }

    fn set_step_marker(&mut self, raw: &str) {
        self.board.set_step_marker(raw);
    }

    fn step_marker(&self) -> Option<&str> {
        self.board.step_marker()
    }

    fn present(&mut self) {
        if let Err(e) = self.write_frame() {
            warn!("Failed to draw dashboard frame: {}", e);
        }
    }
}
