use async_trait::async_trait;
use gamefront_model::Game;

use crate::error::CatalogResult;
use crate::identified::Identified;

/// Paged catalog listing.
///
/// Pages are 1-based. An empty page is a valid answer and means the source
/// has nothing past this point.
#[cfg_attr(feature = "mock", mockall::automock(type Item = Game;))]
#[async_trait]
pub trait PageSource: Send + Sync {
    type Item: Identified + Clone + Send + Sync + 'static;

    async fn fetch_page(&self, page: u32) -> CatalogResult<Vec<Self::Item>>;
}

/// Source of the games promoted in the featured-banner carousel.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait FeaturedSource: Send + Sync {
    async fn fetch_featured(&self) -> CatalogResult<Vec<Game>>;
}
