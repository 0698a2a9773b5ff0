pub mod adoption;
pub mod error;
pub mod fuel;
pub mod vehicle_loader;
