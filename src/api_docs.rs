use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::root,
        api::health::health_check,
        api::recommend::recommend_book,
    ),
    components(
        schemas(
            crate::models::BookRequest,
            crate::models::RecommendedBook,
            crate::models::ErrorDetail,
        )
    ),
    tags(
        (name = "bookshop-genie", description = "Book recommendation API")
    )
)]
pub struct ApiDoc;
