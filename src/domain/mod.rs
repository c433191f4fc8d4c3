// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std and the generic JSON value tree.

pub mod model;
pub mod ports;
