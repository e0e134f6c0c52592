use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;

use liftsim::modules::{controller, timer};
use liftsim::utilities::config::TimingConfig;
use liftsim::utilities::direction::Direction;
use liftsim::utilities::lift::MovementState;
use liftsim::utilities::request::Request;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn start_bank(
    num_lifts: u16,
) -> (
    crossbeam_channel::Sender<(u16, Direction)>,
    crossbeam_channel::Receiver<(Request, bool)>,
    crossbeam_channel::Receiver<liftsim::utilities::status::SimulationStatus>,
) {
    let (call_tx, call_rx) = unbounded();
    let (timer_schedule_tx, timer_schedule_rx) = unbounded();
    let (timer_fired_tx, timer_fired_rx) = unbounded();
    let (request_light_tx, request_light_rx) = unbounded();
    let (status_tx, status_rx) = unbounded();

    let timing = TimingConfig {
        unit_travel_ms: 1,
        door_open_ms: 1,
        door_close_ms: 1,
    };

    thread::spawn(move || timer::main(timer_schedule_rx, timer_fired_tx));
    thread::spawn(move || controller::main(
        num_lifts,
        timing,
        call_rx,
        timer_fired_rx,
        timer_schedule_tx,
        request_light_tx,
        status_tx,
    ));

    (call_tx, request_light_rx, status_rx)
}

#[test]
fn call_is_served_end_to_end() {
    let (call_tx, request_light_rx, status_rx) = start_bank(2);

    call_tx.send((4, Direction::Up)).unwrap();

    let call = Request { floor: 4, direction: Direction::Up };
    assert_eq!(
        request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(),
        (call, true)
    );
    assert_eq!(
        request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(),
        (call, false)
    );

    // after the released notification some broadcast must show a lift idle
    // on the call floor with nothing left to do
    let deadline = Instant::now() + RECV_TIMEOUT;
    loop {
        let status = status_rx
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .expect("no status showed the call served");
        let served = status.lifts.iter().any(|lift| {
            lift.floor == 4 && lift.state == MovementState::Idle && lift.stops.is_empty()
        });
        if served && status.pending.is_empty() {
            break;
        }
    }
}

#[test]
fn queued_call_is_served_once_a_lift_frees_up() {
    let (call_tx, request_light_rx, _status_rx) = start_bank(1);

    call_tx.send((6, Direction::Up)).unwrap();
    call_tx.send((2, Direction::Down)).unwrap();

    let first = Request { floor: 6, direction: Direction::Up };
    let second = Request { floor: 2, direction: Direction::Down };

    // the second call waits in the queue, so the notifications arrive
    // strictly in service order
    assert_eq!(request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(), (first, true));
    assert_eq!(request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(), (first, false));
    assert_eq!(request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(), (second, true));
    assert_eq!(request_light_rx.recv_timeout(RECV_TIMEOUT).unwrap(), (second, false));
}
