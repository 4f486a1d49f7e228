pub mod angle;
pub mod dot;
pub mod quat;
pub mod tolerance;
pub mod vec3;

pub use angle::*;
pub use dot::*;
pub use quat::*;
pub use tolerance::*;
pub use vec3::*;
