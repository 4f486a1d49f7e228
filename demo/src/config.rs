use std::fmt;

use hamilton::math::{Vec3, deg_to_rad};

use crate::error::ConfigError;

/// Parsing states.
enum Parse {
    None,
    Point,
    Axis,
    Angle,
}

/// What to rotate, about what, and by how much.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub point: Vec3,
    pub axis: Vec3,
    pub angle: f64,
    pub degrees: bool,
}
impl Config {
    /// Create a new Config from the command line arguments, program name excluded.
    ///
    /// `-point x y z`, `-axis x y z`, `-angle a` and `-deg` (angle is in degrees).
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut cfg = Config::default();
        let mut point: Option<Vec<f64>> = None;
        let mut axis: Option<Vec<f64>> = None;
        let mut angle: Option<Vec<f64>> = None;

        for arg in args.into_iter() {
            match arg.as_str() {
                "-point" => {
                    parser = Parse::Point;
                    point = Some(Vec::new());
                    continue;
                }
                "-axis" => {
                    parser = Parse::Axis;
                    axis = Some(Vec::new());
                    continue;
                }
                "-angle" => {
                    parser = Parse::Angle;
                    angle = Some(Vec::new());
                    continue;
                }
                "-deg" => {
                    parser = Parse::None;
                    cfg.degrees = true;
                    continue;
                }
                _ => {}
            }
            let (flag, values) = match parser {
                Parse::Point => ("-point", &mut point),
                Parse::Axis => ("-axis", &mut axis),
                Parse::Angle => ("-angle", &mut angle),
                Parse::None => return Err(ConfigError::UnexpectedArgument(arg)),
            };
            let value = arg.parse::<f64>().map_err(|_| ConfigError::InvalidNumber(flag, arg.clone()))?;
            values.get_or_insert_with(Vec::new).push(value);
        }

        if let Some(values) = point {
            cfg.point = vec3("-point", &values)?;
        }
        if let Some(values) = axis {
            cfg.axis = vec3("-axis", &values)?;
        }
        if let Some(values) = angle {
            match values.as_slice() {
                [a] => cfg.angle = *a,
                _ => return Err(ConfigError::WrongValueCount("-angle", 1, values.len())),
            }
        }
        Ok(cfg)
    }

    pub fn angle_radians(&self) -> f64 {
        if self.degrees { deg_to_rad(self.angle) } else { self.angle }
    }
}

fn vec3(flag: &'static str, values: &[f64]) -> Result<Vec3, ConfigError> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ConfigError::WrongValueCount(flag, 3, values.len())),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point: Vec3::X,
            axis: Vec3::Z,
            angle: 0.0,
            degrees: false,
        }
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.degrees { "deg" } else { "rad" };
        write!(f, "point {}, axis {}, angle {} {unit}", self.point, self.axis, self.angle)
    }
}
