pub mod crates;
pub mod lint;
pub mod testing;
