pub mod category;
pub mod collector;
pub mod emit;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod patch;
pub mod table;
