pub mod fuel_category;
pub mod month;
pub(crate) mod ocm;
pub mod station;
pub mod vehicle;
