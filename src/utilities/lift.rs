use std::collections::VecDeque;

use super::request::Request;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Idle,
    Moving,
    DoorsOpening,
    DoorsClosing,
}

impl MovementState {
    pub fn as_string(self) -> String {
        match self {
            MovementState::Idle => String::from("idle"),
            MovementState::Moving => String::from("moving"),
            MovementState::DoorsOpening => String::from("doorsOpening"),
            MovementState::DoorsClosing => String::from("doorsClosing"),
        }
    }
}

/// Timed events driving a lift through one leg of travel. Each event is
/// scheduled when the previous phase starts and handled exactly once by the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftEvent {
    TravelDone,
    DoorsOpened,
    DoorsClosed,
}

/// One lift car. `floor` is the last confirmed floor and only authoritative
/// while the lift is not moving. `stops` holds committed stops that have not
/// been started yet; `committed` additionally holds the stop currently being
/// served, so it always answers "will some leg of this lift serve this call".
#[derive(Debug, Clone)]
pub struct Lift {
    pub id: usize,
    pub floor: u16,
    pub state: MovementState,
    stops: VecDeque<Request>,
    committed: Vec<Request>,
    active: Option<Request>,
}

impl Lift {
    pub fn new(id: usize) -> Self {
        Lift {
            id,
            floor: 1,
            state: MovementState::Idle,
            stops: VecDeque::new(),
            committed: Vec::new(),
            active: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == MovementState::Idle
    }

    pub fn has_committed(&self, request: &Request) -> bool {
        self.committed.contains(request)
    }

    pub fn committed_requests(&self) -> Vec<Request> {
        self.committed.clone()
    }

    pub fn has_stops(&self) -> bool {
        !self.stops.is_empty()
    }

    pub fn active_target(&self) -> Option<Request> {
        self.active
    }

    /// Adds a stop to the tail of the queue. Returns false if this lift has
    /// already committed to the same call.
    pub fn commit(&mut self, request: Request) -> bool {
        if self.has_committed(&request) {
            return false;
        }
        self.stops.push_back(request);
        self.committed.push(request);
        true
    }

    /// Pops the next stop and enters `Moving`. Returns the number of floors
    /// to travel, or None if there is no stop to start.
    pub fn start_next_leg(&mut self) -> Option<u16> {
        let target = self.stops.pop_front()?;
        let floors_to_move = self.floor.abs_diff(target.floor);
        self.active = Some(target);
        self.state = MovementState::Moving;
        Some(floors_to_move)
    }

    pub fn arrive(&mut self) {
        let target = self.active.expect("arrival without an active target");
        self.floor = target.floor;
        self.state = MovementState::DoorsOpening;
    }

    pub fn begin_closing(&mut self) {
        assert!(
            self.state == MovementState::DoorsOpening,
            "lift {} closing doors it never opened",
            self.id
        );
        self.state = MovementState::DoorsClosing;
    }

    /// Releases the commitment for the stop whose door cycle just finished
    /// and returns the served request. The caller decides whether the lift
    /// continues to its next stop or goes idle.
    pub fn complete_stop(&mut self) -> Request {
        let served = self.active.take().expect("no active stop to complete");
        let index = self
            .committed
            .iter()
            .position(|request| *request == served)
            .expect("served stop missing from committed set");
        self.committed.remove(index);
        served
    }
}
