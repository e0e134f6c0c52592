use super::direction::Direction;

/// A floor call. Two calls with the same floor and direction are the same
/// logical request and must never be serviced twice.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub floor: u16,
    pub direction: Direction,
}
