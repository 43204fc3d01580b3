// Mecanum base runtime
//
// Turns stick commands into per-wheel tangential speeds for a 4-wheel
// mecanum chassis and publishes them over zenoh for a downstream motor
// bridge. The kinematics live in `drive`; the loop, wire messages, and
// configuration around them are thin.

pub mod config;
pub mod drive;
pub mod messages;
pub mod runtime;
