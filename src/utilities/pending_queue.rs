use std::collections::VecDeque;

use super::request::Request;

/// Holding area for calls that no lift could take at request time. FIFO,
/// except that a request popped for a drain attempt that finds no idle lift
/// is put back at the front so the next drain sees it first.
#[derive(Debug, Clone)]
pub struct PendingQueue {
    requests: VecDeque<Request>,
}

impl PendingQueue {
    pub fn new() -> Self {
        PendingQueue {
            requests: VecDeque::new(),
        }
    }

    /// Appends a request to the tail. Returns false if the same call is
    /// already waiting.
    pub fn push_back(&mut self, request: Request) -> bool {
        if self.contains(&request) {
            return false;
        }
        self.requests.push_back(request);
        true
    }

    pub fn push_front(&mut self, request: Request) {
        self.requests.push_front(request);
    }

    pub fn pop_front(&mut self) -> Option<Request> {
        self.requests.pop_front()
    }

    pub fn contains(&self, request: &Request) -> bool {
        self.requests.contains(request)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::direction::Direction;

    fn request(floor: u16, direction: Direction) -> Request {
        Request { floor, direction }
    }

    #[test]
    fn duplicate_calls_are_absorbed() {
        let mut queue = PendingQueue::new();
        assert!(queue.push_back(request(3, Direction::Up)));
        assert!(!queue.push_back(request(3, Direction::Up)));
        assert!(queue.push_back(request(3, Direction::Down)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn front_reinsert_preserves_order() {
        let mut queue = PendingQueue::new();
        queue.push_back(request(2, Direction::Up));
        queue.push_back(request(6, Direction::Down));

        let popped = queue.pop_front().unwrap();
        queue.push_front(popped);

        assert_eq!(
            queue.requests(),
            vec![request(2, Direction::Up), request(6, Direction::Down)]
        );
    }
}
