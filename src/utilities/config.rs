use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{Error, ErrorKind};

pub const MIN_FLOORS: u16 = 2;
pub const MAX_FLOORS: u16 = 500;
pub const MIN_LIFTS: u16 = 1;
pub const MAX_LIFTS: u16 = 500;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub settings: HashMap<String, u16>,
    pub timing: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct LiftSettings {
    pub num_floors: u16,
    pub num_lifts: u16,
}

#[derive(Debug, Clone)]
pub struct TimingConfig {
    pub unit_travel_ms: u64,
    pub door_open_ms: u64,
    pub door_close_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: LiftSettings,
    pub timing: TimingConfig,
}

impl Config {
    pub fn get() -> Self {
        let file_path = "config.json";
        let fallback_file_path = "_config.json";
        let config_contents = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(_) => {
                println!("No configuration file provided, using default settings...");
                fs::read_to_string(fallback_file_path).unwrap()
            },
        };
        let config_file: ConfigFile = serde_json::from_str(&config_contents).unwrap();
        let (num_floors, num_lifts) = parse_env_args();

        Config {
            settings: LiftSettings {
                num_floors: num_floors.unwrap_or(config_file.settings["numFloors"]),
                num_lifts: num_lifts.unwrap_or(config_file.settings["numLifts"]),
            },
            timing: TimingConfig {
                unit_travel_ms: config_file.timing["unitTravelMs"],
                door_open_ms: config_file.timing["doorOpenMs"],
                door_close_ms: config_file.timing["doorCloseMs"],
            },
        }
    }

    /// Rejects out-of-range building sizes before any lift state is built.
    pub fn validate(&self) -> std::io::Result<()> {
        if self.settings.num_floors < MIN_FLOORS || self.settings.num_floors > MAX_FLOORS {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("number of floors must be between {} and {}", MIN_FLOORS, MAX_FLOORS),
            ));
        }
        if self.settings.num_lifts < MIN_LIFTS || self.settings.num_lifts > MAX_LIFTS {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("number of lifts must be between {} and {}", MIN_LIFTS, MAX_LIFTS),
            ));
        }
        Ok(())
    }
}

fn parse_env_args() -> (Option<u16>, Option<u16>) {
    let (mut num_floors, mut num_lifts) = (None, None);

    let args: Vec<String> = env::args().collect();
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--floors" => {
                num_floors = match arg_pair[1].parse::<u16>() {
                    Ok(num) => Some(num),
                    Err(_) => {
                        println!("floors {} is not a number, skipping...", arg_pair[1]);
                        num_floors
                    },
                };
            },
            "--lifts" => {
                num_lifts = match arg_pair[1].parse::<u16>() {
                    Ok(num) => Some(num),
                    Err(_) => {
                        println!("lifts {} is not a number, skipping...", arg_pair[1]);
                        num_lifts
                    },
                };
            },
            _ => {},
        }
    }
    (num_floors, num_lifts)
}
