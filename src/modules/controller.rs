/// ----- CONTROLLER MODULE -----
/// This module is the dispatch scheduler and the owner of all lift state.
/// Every floor call and every timer event is handled one at a time inside
/// a single select loop, so no transition can ever observe another one half
/// done. Calls that no idle lift can take wait in the pending queue and are
/// re-examined each time a lift finishes a stop.

use std::time::Duration;

use crossbeam_channel::{select, Receiver, Sender};

use crate::modules::timer::ScheduledTimer;
use crate::utilities::config::TimingConfig;
use crate::utilities::direction::Direction;
use crate::utilities::lift::{Lift, LiftEvent, MovementState};
use crate::utilities::pending_queue::PendingQueue;
use crate::utilities::request::Request;
use crate::utilities::status::{LiftSnapshot, SimulationStatus};

pub struct SimulationController {
    timing: TimingConfig,
    lifts: Vec<Lift>,
    pending: PendingQueue,
    timer_tx: Sender<ScheduledTimer>,
    request_light_tx: Sender<(Request, bool)>,
}

impl SimulationController {
    pub fn new(
        num_lifts: u16,
        timing: TimingConfig,
        timer_tx: Sender<ScheduledTimer>,
        request_light_tx: Sender<(Request, bool)>,
    ) -> Self {
        SimulationController {
            timing,
            lifts: (0..num_lifts as usize).map(Lift::new).collect(),
            pending: PendingQueue::new(),
            timer_tx,
            request_light_tx,
        }
    }

    /// The sole mutation entry point for the outside world. Picks a lift for
    /// the call or parks it in the pending queue.
    pub fn request_lift(&mut self, floor: u16, direction: Direction) {
        let request = Request { floor, direction };

        // a lift is already on its way to this call
        if self.lifts.iter().any(|lift| lift.has_committed(&request)) {
            return;
        }

        // the call is already waiting in the queue
        if self.pending.contains(&request) {
            return;
        }

        // an idle lift is already on this floor
        if let Some(id) = self
            .lifts
            .iter()
            .position(|lift| lift.is_idle() && lift.floor == floor)
        {
            self.assign(id, request);
            return;
        }

        if let Some(id) = self.nearest_idle(floor) {
            self.assign(id, request);
            return;
        }

        self.pending.push_back(request);
    }

    /// Commits a call to one lift's stop queue and starts the lift if it is
    /// idle. A call the lift already holds is absorbed silently.
    pub fn assign(&mut self, id: usize, request: Request) {
        if self.lifts[id].has_committed(&request) {
            return;
        }
        assert!(
            self.lifts.iter().all(|lift| !lift.has_committed(&request)),
            "call {:?} is already committed to another lift",
            request
        );
        assert!(
            !self.pending.contains(&request),
            "call {:?} is both assigned and pending",
            request
        );
        self.lifts[id].commit(request);
        self.request_light_tx.send((request, true)).unwrap();
        if self.lifts[id].is_idle() {
            self.begin_leg(id);
        }
    }

    /// Advances one lift through one phase of its travel/door cycle.
    pub fn handle_lift_event(&mut self, id: usize, event: LiftEvent) {
        match event {
            LiftEvent::TravelDone => {
                self.lifts[id].arrive();
                self.schedule(id, LiftEvent::DoorsOpened, self.timing.door_open_ms);
            },
            LiftEvent::DoorsOpened => {
                self.lifts[id].begin_closing();
                self.schedule(id, LiftEvent::DoorsClosed, self.timing.door_close_ms);
            },
            LiftEvent::DoorsClosed => {
                let served = self.lifts[id].complete_stop();
                self.request_light_tx.send((served, false)).unwrap();
                if self.lifts[id].has_stops() {
                    // straight on to the next stop, never observably idle
                    self.begin_leg(id);
                } else {
                    self.lifts[id].state = MovementState::Idle;
                }
                self.drain_pending();
            },
        }
    }

    pub fn snapshot(&self) -> SimulationStatus {
        SimulationStatus {
            lifts: self.lifts.iter().map(LiftSnapshot::of).collect(),
            pending: self.pending.requests(),
        }
    }

    fn begin_leg(&mut self, id: usize) {
        let floors_to_move = self.lifts[id]
            .start_next_leg()
            .expect("moving a lift with no stops");
        let travel_ms = floors_to_move as u64 * self.timing.unit_travel_ms;
        self.schedule(id, LiftEvent::TravelDone, travel_ms);
    }

    /// Takes at most one waiting call per completed stop. If no lift is idle
    /// the call goes back to the front of the queue so the next drain sees
    /// the same call first.
    fn drain_pending(&mut self) {
        let request = match self.pending.pop_front() {
            Some(request) => request,
            None => return,
        };
        match self.nearest_idle(request.floor) {
            Some(id) => self.assign(id, request),
            None => self.pending.push_front(request),
        }
    }

    fn nearest_idle(&self, floor: u16) -> Option<usize> {
        let mut nearest: Option<(usize, u16)> = None;
        for (id, lift) in self.lifts.iter().enumerate() {
            if !lift.is_idle() {
                continue;
            }
            let distance = lift.floor.abs_diff(floor);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((id, distance));
            }
        }
        nearest.map(|(id, _)| id)
    }

    fn schedule(&self, id: usize, event: LiftEvent, delay_ms: u64) {
        self.timer_tx.send(ScheduledTimer {
            lift: id,
            event,
            delay: Duration::from_millis(delay_ms),
        }).unwrap();
    }
}

pub fn main(
    num_lifts: u16,
    timing: TimingConfig,
    call_rx: Receiver<(u16, Direction)>,
    timer_fired_rx: Receiver<(usize, LiftEvent)>,
    timer_schedule_tx: Sender<ScheduledTimer>,
    request_light_tx: Sender<(Request, bool)>,
    status_tx: Sender<SimulationStatus>,
) {
    let mut controller = SimulationController::new(
        num_lifts,
        timing,
        timer_schedule_tx,
        request_light_tx,
    );

    loop {
        select! {
            recv(call_rx) -> msg => {
                let (floor, direction) = msg.unwrap();
                controller.request_lift(floor, direction);
            },
            recv(timer_fired_rx) -> msg => {
                let (lift, event) = msg.unwrap();
                controller.handle_lift_event(lift, event);
            },
        }
        status_tx.send(controller.snapshot()).unwrap();
    }
}
