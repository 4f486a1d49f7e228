pub mod axis_angle;

pub use axis_angle::*;
