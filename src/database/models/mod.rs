pub mod catalog;
pub mod group;
pub mod lesson;

pub use catalog::*;
pub use group::*;
pub use lesson::*;
