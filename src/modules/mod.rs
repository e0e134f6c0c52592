use std::thread;

use crossbeam_channel::{select, unbounded};

use crate::utilities::config::Config;

pub mod controller;
pub mod debug;
pub mod input;
pub mod timer;

pub fn run() -> std::io::Result<()> {
    // READ AND CHECK CONFIGURATION
    let config = Config::get();
    config.validate()?;

    // INITIALIZE CHANNELS
    let (call_tx, call_rx) = unbounded();
    let (timer_schedule_tx, timer_schedule_rx) = unbounded();
    let (timer_fired_tx, timer_fired_rx) = unbounded();
    let (request_light_tx, request_light_rx) = unbounded();
    let (status_tx, status_rx) = unbounded();
    let (stop_tx, stop_rx) = unbounded();

    // INITIALIZE THREAD FOR TIMERS
    thread::Builder::new().name("timer".to_string()).spawn(move || timer::main(
        timer_schedule_rx,
        timer_fired_tx,
    ))?;

    // INITIALIZE THREAD FOR THE DISPATCH CONTROLLER
    {
        let num_lifts = config.settings.num_lifts;
        let timing = config.timing.clone();
        thread::Builder::new().name("controller".to_string()).spawn(move || controller::main(
            num_lifts,
            timing,
            call_rx,
            timer_fired_rx,
            timer_schedule_tx,
            request_light_tx,
            status_tx,
        ))?;
    }

    // INITIALIZE THREAD FOR FLOOR CALL INPUT
    {
        let num_floors = config.settings.num_floors;
        thread::Builder::new().name("input".to_string()).spawn(move || input::main(
            num_floors,
            call_tx,
            stop_tx,
        ))?;
    }

    println!(
        "Lift bank started: {} lifts serving {} floors",
        config.settings.num_lifts, config.settings.num_floors
    );
    println!("Call a lift with \"<floor> <up|down>\", stop with \"quit\"\n");

    let mut debug = debug::Debug::new();
    loop {
        select! {
            recv(status_rx) -> msg => {
                debug.printstatus(&msg.unwrap()).unwrap();
            },
            recv(request_light_rx) -> msg => {
                let (request, on) = msg.unwrap();
                debug.set_button_light(request, on);
            },
            recv(stop_rx) -> _ => {
                println!("STOPPING PROGRAM...");
                return Ok(())
            }
        }
    }
}
