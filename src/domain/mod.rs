// Domain layer: profile/environment models and the lookup port. No I/O here.

pub mod model;
pub mod ports;
