/// ----- TIMER MODULE -----
/// This module owns every scheduled delay in the simulation. Other modules
/// ask for a callback by sending a ScheduledTimer; once the delay has
/// elapsed the event is sent back on the fired channel. Ties are resolved
/// in scheduling order, so events scheduled by the same lift never overtake
/// each other.

use std::time::{Duration, Instant};

use crossbeam_channel::{select, Receiver, Sender};

use crate::utilities::lift::LiftEvent;

const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
pub struct ScheduledTimer {
    pub lift: usize,
    pub event: LiftEvent,
    pub delay: Duration,
}

pub fn main(schedule_rx: Receiver<ScheduledTimer>, fired_tx: Sender<(usize, LiftEvent)>) {
    let mut deadlines: Vec<(Instant, u64, ScheduledTimer)> = Vec::new();
    let mut next_seq: u64 = 0;

    loop {
        let timeout = deadlines
            .iter()
            .map(|(deadline, _, _)| *deadline)
            .min()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        select! {
            recv(schedule_rx) -> msg => {
                let timer = msg.unwrap();
                deadlines.push((Instant::now() + timer.delay, next_seq, timer));
                next_seq += 1;
            },
            default(timeout) => {
                let now = Instant::now();
                deadlines.sort_by_key(|(deadline, seq, _)| (*deadline, *seq));
                while deadlines.first().map_or(false, |(deadline, _, _)| *deadline <= now) {
                    let (_, _, timer) = deadlines.remove(0);
                    fired_tx.send((timer.lift, timer.event)).unwrap();
                }
            },
        }
    }
}
