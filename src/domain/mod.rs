pub mod card;
pub mod group;

pub use card::{Card, Outcome};
pub use group::Group;
