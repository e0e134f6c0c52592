/// ----- INPUT MODULE -----
/// This module turns stdin lines into floor calls. A call is written as
/// "<floor> <up|down>"; "quit" ends the program. Floors outside the
/// building are rejected here so the controller never sees them.

use std::io::{self, BufRead};

use crossbeam_channel::Sender;

use crate::utilities::direction::Direction;

pub fn main(num_floors: u16, call_tx: Sender<(u16, Direction)>, stop_tx: Sender<bool>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "q" {
            break;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            println!("expected \"<floor> <up|down>\", skipping...");
            continue;
        }
        let floor = match parts[0].parse::<u16>() {
            Ok(floor) => floor,
            Err(_) => {
                println!("floor {} is not a number, skipping...", parts[0]);
                continue;
            },
        };
        if floor < 1 || floor > num_floors {
            println!("floor {} is outside the building, skipping...", floor);
            continue;
        }
        let direction = match Direction::from_string(parts[1]) {
            Some(direction) => direction,
            None => {
                println!("direction {} is not up or down, skipping...", parts[1]);
                continue;
            },
        };
        call_tx.send((floor, direction)).unwrap();
    }
    stop_tx.send(true).unwrap();
}
