pub mod directory;
pub mod gateway;
pub mod model;
