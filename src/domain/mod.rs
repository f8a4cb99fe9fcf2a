// Domain layer: descriptors and the traits types implement to opt into introspection.

pub mod model;
pub mod ports;
