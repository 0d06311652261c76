// Domain layer: value types and the ports the planner talks through.

pub mod model;
pub mod ports;
