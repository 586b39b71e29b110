pub mod normalize;

pub use normalize::{normalize_column_name, split_authors, split_people};
