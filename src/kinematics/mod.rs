// Kinematic models module

pub mod diff_drive;
pub mod car_like;

pub use diff_drive::*;
pub use car_like::*;
