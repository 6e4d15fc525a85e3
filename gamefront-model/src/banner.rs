use std::ops::Deref;
use std::sync::Arc;

use uuid::Uuid;

use crate::game::Game;
use crate::ids::GameId;

/// Maximum subtitle length (in characters) before it is cut with an ellipsis.
pub const SUBTITLE_MAX_CHARS: usize = 120;

const SUBTITLE_FALLBACK: &str = "Explore this exciting game adventure";

/// A featured-banner record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Banner {
    pub id: GameId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: String,
    pub image: String,
    pub mobile_image: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Option<String>,
}

impl Banner {
    /// Format a catalog game as a featured banner.
    ///
    /// The desktop image prefers the second short screenshot (the first one
    /// usually duplicates the background), the mobile image is always the
    /// background.
    pub fn from_game(game: &Game) -> Self {
        let background = game.background_image.clone().unwrap_or_default();
        let image = game
            .short_screenshots
            .get(1)
            .map(|shot| shot.image.clone())
            .unwrap_or_else(|| background.clone());

        Self {
            id: game.id.clone(),
            title: game.name.clone(),
            subtitle: subtitle_for(game),
            image,
            mobile_image: background,
            genres: game.genre_line(),
        }
    }

    pub fn route(&self) -> String {
        format!("/games/{}", self.id)
    }
}

fn subtitle_for(game: &Game) -> String {
    if let Some(description) =
        game.description.as_deref().filter(|d| !d.is_empty())
    {
        if description.chars().count() > SUBTITLE_MAX_CHARS {
            let cut: String =
                description.chars().take(SUBTITLE_MAX_CHARS).collect();
            return format!("{cut}...");
        }
        return description.to_string();
    }
    if let Some(released) = game.released {
        return format!("Released: {}", released.format("%Y-%m-%d"));
    }
    SUBTITLE_FALLBACK.to_string()
}

/// An immutable, per-load sequence of banners.
///
/// Every load gets a fresh `load_id`, which is what consumers compare to
/// decide whether the data changed. Two sets with equal contents but
/// different loads are distinct.
#[derive(Debug, Clone)]
pub struct BannerSet {
    load_id: Uuid,
    banners: Arc<[Banner]>,
}

impl BannerSet {
    pub fn new(banners: Vec<Banner>) -> Self {
        Self {
            load_id: Uuid::new_v4(),
            banners: banners.into(),
        }
    }

    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a Game>) -> Self {
        Self::new(games.into_iter().map(Banner::from_game).collect())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn load_id(&self) -> Uuid {
        self.load_id
    }

    pub fn same_load(&self, other: &BannerSet) -> bool {
        self.load_id == other.load_id
    }

    pub fn as_slice(&self) -> &[Banner] {
        &self.banners
    }
}

impl PartialEq for BannerSet {
    fn eq(&self, other: &Self) -> bool {
        self.same_load(other)
    }
}

impl Eq for BannerSet {}

impl Default for BannerSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for BannerSet {
    type Target = [Banner];

    fn deref(&self) -> &Self::Target {
        &self.banners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Genre, Screenshot};
    use chrono::NaiveDate;

    fn shot(id: i64, image: &str) -> Screenshot {
        Screenshot {
            id,
            image: image.to_string(),
        }
    }

    #[test]
    fn desktop_image_prefers_second_screenshot() {
        let mut game = Game::new("7", "Celeste");
        game.background_image = Some("bg.jpg".into());
        game.short_screenshots = vec![shot(1, "s1.jpg"), shot(2, "s2.jpg")];

        let banner = Banner::from_game(&game);
        assert_eq!(banner.image, "s2.jpg");
        assert_eq!(banner.mobile_image, "bg.jpg");
    }

    #[test]
    fn single_screenshot_falls_back_to_background() {
        let mut game = Game::new("7", "Celeste");
        game.background_image = Some("bg.jpg".into());
        game.short_screenshots = vec![shot(1, "s1.jpg")];

        assert_eq!(Banner::from_game(&game).image, "bg.jpg");
    }

    #[test]
    fn long_descriptions_are_truncated_with_ellipsis() {
        let mut game = Game::new("1", "Hades");
        game.description = Some("x".repeat(200));

        let subtitle = Banner::from_game(&game).subtitle;
        assert_eq!(subtitle.chars().count(), SUBTITLE_MAX_CHARS + 3);
        assert!(subtitle.ends_with("..."));
    }

    #[test]
    fn subtitle_uses_release_date_then_fallback() {
        let mut game = Game::new("1", "Hades");
        game.released = NaiveDate::from_ymd_opt(2020, 9, 17);
        assert_eq!(Banner::from_game(&game).subtitle, "Released: 2020-09-17");

        game.released = None;
        assert_eq!(Banner::from_game(&game).subtitle, SUBTITLE_FALLBACK);
    }

    #[test]
    fn genres_are_carried_over() {
        let mut game = Game::new("1", "Hades");
        game.genres = vec![Genre {
            id: 1,
            name: "Roguelike".into(),
            slug: "roguelike".into(),
        }];
        assert_eq!(
            Banner::from_game(&game).genres.as_deref(),
            Some("Roguelike")
        );
    }

    #[test]
    fn each_set_is_a_distinct_load() {
        let games = [Game::new("1", "A")];
        let first = BannerSet::from_games(&games);
        let second = BannerSet::from_games(&games);
        assert!(first.same_load(&first.clone()));
        assert!(!first.same_load(&second));
        assert_eq!(first.len(), 1);
    }
}
