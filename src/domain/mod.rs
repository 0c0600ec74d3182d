// Domain layer: the record, the profile model, and the component port. No I/O here.

pub mod model;
pub mod ports;
pub mod profiles;
