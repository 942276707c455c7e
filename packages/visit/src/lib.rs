pub mod visitor;

pub use visitor::{rewrite, Edit};
