//! Fixture-backed catalog
//!
//! An in-memory [`PageSource`] and [`FeaturedSource`] fed either from code or
//! from a JSON document of list envelopes:
//!
//! ```json
//! {
//!   "featured": { "results": [ ... ] },
//!   "pages": [ { "count": 40, "results": [ ... ] }, ... ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use gamefront_contracts::{CatalogError, CatalogResult, FeaturedSource, PageSource};
use gamefront_model::{ApiResponse, Game};
use serde::Deserialize;
use tracing::{debug, trace};

#[derive(Debug, Default, Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    featured: ApiResponse<Game>,
    #[serde(default)]
    pages: Vec<ApiResponse<Game>>,
}

/// Catalog that serves fixed pages, with optional latency and failures.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    featured: Vec<Game>,
    pages: Vec<Vec<Game>>,
    latency: Option<Duration>,
    failing_pages: HashSet<u32>,
    featured_fails: bool,
}

impl FixtureCatalog {
    pub fn new(featured: Vec<Game>, pages: Vec<Vec<Game>>) -> Self {
        Self {
            featured,
            pages,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: FixtureDocument = serde_json::from_str(json)
            .map_err(|err| CatalogError::Decode(err.to_string()))?;
        Ok(Self::new(
            document.featured.into_results(),
            document
                .pages
                .into_iter()
                .map(ApiResponse::into_results)
                .collect(),
        ))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(
            path = %path.display(),
            pages = catalog.pages.len(),
            featured = catalog.featured.len(),
            "loaded fixture catalog"
        );
        Ok(catalog)
    }

    /// Synthetic catalog of `page_count` pages of `page_size` games where
    /// each page repeats the last `overlap` games of the page before it.
    pub fn generated(page_count: u32, page_size: usize, overlap: usize) -> Self {
        let overlap = overlap.min(page_size);
        let fresh_per_page = page_size.saturating_sub(overlap).max(1);
        let mut pages: Vec<Vec<Game>> = Vec::with_capacity(page_count as usize);
        let mut next_id: u64 = 1;

        for _ in 0..page_count {
            let mut games: Vec<Game> = pages
                .last()
                .map(|previous| {
                    let keep = previous.len().saturating_sub(overlap);
                    previous[keep..].to_vec()
                })
                .unwrap_or_default();
            let fresh = if games.is_empty() { page_size } else { fresh_per_page };
            for _ in 0..fresh {
                games.push(generated_game(next_id));
                next_id += 1;
            }
            pages.push(games);
        }

        let featured = pages
            .first()
            .map(|first| first.iter().take(5).cloned().collect())
            .unwrap_or_default();
        Self::new(featured, pages)
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make requests for `page` fail.
    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn failing_featured(mut self) -> Self {
        self.featured_fails = true;
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Distinct games across all pages.
    pub fn unique_games(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|game| &game.id)
            .collect::<HashSet<_>>()
            .len()
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

fn generated_game(id: u64) -> Game {
    let mut game = Game::new(id, format!("Generated Game {id}"));
    game.slug = format!("generated-game-{id}");
    game
}

#[async_trait]
impl PageSource for FixtureCatalog {
    type Item = Game;

    async fn fetch_page(&self, page: u32) -> CatalogResult<Vec<Game>> {
        self.simulate_latency().await;
        if page == 0 {
            return Err(CatalogError::page(page, "pages start at 1"));
        }
        if self.failing_pages.contains(&page) {
            return Err(CatalogError::page(page, "simulated failure"));
        }
        let games = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        trace!(page, count = games.len(), "fixture page served");
        Ok(games)
    }
}

#[async_trait]
impl FeaturedSource for FixtureCatalog {
    async fn fetch_featured(&self) -> CatalogResult<Vec<Game>> {
        self.simulate_latency().await;
        if self.featured_fails {
            return Err(CatalogError::unavailable("simulated featured failure"));
        }
        Ok(self.featured.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "featured": {
            "count": 1,
            "results": [{ "id": 3498, "name": "Grand Theft Auto V", "slug": "gta-v" }]
        },
        "pages": [
            { "count": 4, "next": "page=2", "results": [
                { "id": 1, "name": "One" },
                { "id": 2, "name": "Two" }
            ]},
            { "count": 4, "previous": "page=1", "results": [
                { "id": "2", "name": "Two" },
                { "id": 3, "name": "Three" }
            ]}
        ]
    }"#;

    #[tokio::test]
    async fn serves_pages_from_json() {
        let catalog = FixtureCatalog::from_json_str(FIXTURE).unwrap();
        assert_eq!(catalog.page_count(), 2);
        assert_eq!(catalog.unique_games(), 3);

        let first = catalog.fetch_page(1).await.unwrap();
        assert_eq!(first.len(), 2);
        assert!(catalog.fetch_page(3).await.unwrap().is_empty());

        let featured = catalog.fetch_featured().await.unwrap();
        assert_eq!(featured[0].id.as_str(), "3498");
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let catalog = FixtureCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.fetch_page(2).await.unwrap().len(), 2);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = FixtureCatalog::from_json_str("{ \"pages\": 7 }").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FixtureCatalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn generated_pages_overlap() {
        let catalog = FixtureCatalog::generated(3, 4, 2);
        assert_eq!(catalog.page_count(), 3);
        // 4 + 2 + 2 distinct games.
        assert_eq!(catalog.unique_games(), 8);
    }

    #[tokio::test]
    async fn failures_are_injectable() {
        let catalog = FixtureCatalog::generated(2, 2, 0)
            .failing_page(2)
            .failing_featured();
        assert!(catalog.fetch_page(1).await.is_ok());
        assert!(catalog.fetch_page(2).await.is_err());
        assert!(catalog.fetch_page(0).await.is_err());
        assert!(catalog.fetch_featured().await.is_err());
    }
}
