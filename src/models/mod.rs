pub mod recommendation;

pub use recommendation::{BookRequest, ErrorDetail, RecommendedBook};
