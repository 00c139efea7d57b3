// Domain layer: the place model, ports (interfaces), and pure list services.

pub mod model;
pub mod ports;
pub mod services;
