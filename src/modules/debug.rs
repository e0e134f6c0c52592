/// ----- DEBUG MODULE -----
/// This module renders the whole bank as tables that are redrawn in place:
/// one row per lift plus the lit call buttons and the waiting queue.

use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, Result};

use crate::utilities::direction::Direction;
use crate::utilities::request::Request;
use crate::utilities::status::SimulationStatus;

pub struct Debug {
    stdout: Stdout,
    lit_buttons: Vec<Request>,
    last_height: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            lit_buttons: Vec::new(),
            last_height: 0,
        }
    }

    /// Mirrors the "being served" / "released" notifications onto the call
    /// button panel.
    pub fn set_button_light(&mut self, request: Request, on: bool) {
        if on {
            if !self.lit_buttons.contains(&request) {
                self.lit_buttons.push(request);
            }
        } else {
            self.lit_buttons.retain(|lit| *lit != request);
        }
    }

    pub fn printstatus(&mut self, status: &SimulationStatus) -> Result<()> {
        if self.last_height > 0 {
            self.stdout.execute(cursor::MoveUp(self.last_height))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        let mut height: u16 = 0;

        writeln!(self.stdout, "+------------+------------+--------------+----------------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<12} | {3:<20} |", "LIFT", "FLOOR", "STATE", "STOPS")?;
        height += 2;
        for lift in &status.lifts {
            writeln!(self.stdout, "+------------+------------+--------------+----------------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<12} | {3:<20} |",
                lift.id,
                lift.floor,
                lift.state.as_string(),
                format_requests(&lift.stops))?;
            height += 2;
        }
        writeln!(self.stdout, "+------------+------------+--------------+----------------------+\n")?;
        height += 2;

        writeln!(self.stdout, "+--------------+--------------------------------------+")?;
        writeln!(self.stdout, "| {0:<12} | {1:<36} |", "LIT BUTTONS", format_requests(&self.lit_buttons))?;
        writeln!(self.stdout, "+--------------+--------------------------------------+")?;
        writeln!(self.stdout, "| {0:<12} | {1:<36} |", "WAITING", format_requests(&status.pending))?;
        writeln!(self.stdout, "+--------------+--------------------------------------+")?;
        height += 5;

        self.last_height = height;
        Ok(())
    }
}

fn format_requests(requests: &[Request]) -> String {
    requests
        .iter()
        .map(|request| {
            let arrow = match request.direction {
                Direction::Up => "^",
                Direction::Down => "v",
            };
            format!("{}{}", request.floor, arrow)
        })
        .collect::<Vec<String>>()
        .join(" ")
}
