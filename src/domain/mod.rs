// Domain layer: models, built-in content and ports (interfaces).

pub mod content;
pub mod model;
pub mod ports;
