pub mod integrations;
pub mod recommender;
