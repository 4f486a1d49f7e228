use std::process::ExitCode;

use hamilton::math::Vec3;
use hamilton::rotation::Rotation;
use log::{error, info};

mod config;
mod error;

use config::Config;
use error::DemoError;

const USAGE: &str = "usage: demo [-point x y z] [-axis x y z] [-angle a] [-deg]";

fn run(args: Vec<String>) -> Result<Vec3, DemoError> {
    let cfg = Config::new(args)?;
    info!("{cfg}");
    let rotation = Rotation::new(cfg.axis, cfg.angle_radians())?;
    info!("rotation quaternion {}", rotation.quaternion());
    Ok(rotation.rotate(cfg.point)?)
}

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().skip(1).collect()) {
        Ok(rotated) => {
            println!("{rotated}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{err}\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}
