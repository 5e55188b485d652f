// Service exports
pub mod gazetteer;
pub mod registry;

pub use gazetteer::Gazetteer;
pub use registry::{RegistryClient, RegistryError, RegistrySource, StaticRegistry};
