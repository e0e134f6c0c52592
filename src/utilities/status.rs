use super::lift::{Lift, MovementState};
use super::request::Request;

/// Read-only view of one lift for observers. `stops` lists every outstanding
/// commitment, including the stop currently being served.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct LiftSnapshot {
    pub id: usize,
    pub floor: u16,
    pub state: MovementState,
    pub stops: Vec<Request>,
}

impl LiftSnapshot {
    pub fn of(lift: &Lift) -> Self {
        LiftSnapshot {
            id: lift.id,
            floor: lift.floor,
            state: lift.state,
            stops: lift.committed_requests(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SimulationStatus {
    pub lifts: Vec<LiftSnapshot>,
    pub pending: Vec<Request>,
}
