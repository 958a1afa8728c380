// Domain layer: core models, run events and ports (interfaces). No filesystem access here.

pub mod events;
pub mod model;
pub mod ports;
