pub mod card;
pub mod stack;
pub mod wrapper;

pub use card::{Card, build_card};
pub use stack::{Geometry, Layout, Transform};
pub use wrapper::get_wrapper;
