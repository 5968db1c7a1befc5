pub mod repository;
pub mod resource;

pub use repository::Repository;
pub use resource::{Resource, RestResource, StatusResource};
