// Domain layer: the course record and the ports the core depends on.

pub mod model;
pub mod ports;
