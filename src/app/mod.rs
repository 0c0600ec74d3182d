pub mod bootstrap;

pub use bootstrap::build_context;
