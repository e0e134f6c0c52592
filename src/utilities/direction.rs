#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_string(direction: &str) -> Option<Self> {
        match direction {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Up => String::from("up"),
            Direction::Down => String::from("down"),
        }
    }
}
