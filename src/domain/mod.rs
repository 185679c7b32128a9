// Domain layer: waitlist models and the presenter port. No I/O here.

pub mod model;
pub mod ports;
