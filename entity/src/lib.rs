pub mod prelude;

pub mod baked_good;
pub mod bakery;
