pub mod cache;
pub mod error;
pub mod export;
pub mod map;
pub mod regions;
pub mod station_loader;
