pub mod primitives;
pub mod store;

pub use store::Store;
