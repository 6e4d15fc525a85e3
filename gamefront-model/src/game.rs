use chrono::NaiveDate;

use crate::ids::GameId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Screenshot {
    pub id: i64,
    pub image: String,
}

/// A game record as listed by the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slug: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub background_image: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_screenshots: Vec<Screenshot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub metacritic: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub released: Option<NaiveDate>,
}

impl Game {
    /// Minimal record with only an id and a display name.
    pub fn new(id: impl Into<GameId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            background_image: None,
            short_screenshots: Vec::new(),
            description: None,
            genres: Vec::new(),
            metacritic: None,
            rating: None,
            released: None,
        }
    }

    /// Up to three genre names joined with a middle dot, or `None` when the
    /// game carries no genres.
    pub fn genre_line(&self) -> Option<String> {
        if self.genres.is_empty() {
            return None;
        }
        let names: Vec<&str> = self
            .genres
            .iter()
            .take(3)
            .map(|genre| genre.name.as_str())
            .collect();
        Some(names.join(" · "))
    }

    /// Storefront detail route for this game.
    pub fn route(&self) -> String {
        format!("/games/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: u64, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
        }
    }

    #[test]
    fn genre_line_keeps_the_first_three_names() {
        let mut game = Game::new("1", "Portal 2");
        game.genres = vec![
            genre(1, "Action"),
            genre(2, "Puzzle"),
            genre(3, "Shooter"),
            genre(4, "Indie"),
        ];
        assert_eq!(
            game.genre_line().as_deref(),
            Some("Action · Puzzle · Shooter")
        );
    }

    #[test]
    fn genre_line_is_absent_without_genres() {
        assert_eq!(Game::new("1", "Limbo").genre_line(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_a_sparse_catalog_record() {
        let raw = r#"{
            "id": 3328,
            "name": "The Witcher 3: Wild Hunt",
            "background_image": "https://media.example/witcher.jpg",
            "released": "2015-05-18",
            "genres": [{"id": 4, "name": "Action", "slug": "action"}]
        }"#;
        let game: Game = serde_json::from_str(raw).unwrap();
        assert_eq!(game.id.as_str(), "3328");
        assert_eq!(game.released, NaiveDate::from_ymd_opt(2015, 5, 18));
        assert!(game.short_screenshots.is_empty());
        assert_eq!(game.route(), "/games/3328");
    }
}
