//! Bookshop page controller and its backend client

pub mod client;
pub mod controller;
pub mod dom;
pub mod page;

pub use client::{
    ClientError, FALLBACK_ERROR_MESSAGE, HttpRecommendationClient, RecommendationApi,
};
pub use controller::{
    DisclosureStage, EMPTY_QUERY_MESSAGE, InteractionController, LOADING_TEXT, UiError, UiEvent,
};
pub use dom::{Display, Document, Element, Node};
pub use page::{bookshop_page, ids};
