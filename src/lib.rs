pub mod api;
pub mod api_docs;
pub mod domain;
pub mod frontend;
pub mod infrastructure;
pub mod models;
pub mod modules;
pub mod services;

pub use infrastructure::config;
pub use infrastructure::server;
pub use modules::integrations::google_books;
