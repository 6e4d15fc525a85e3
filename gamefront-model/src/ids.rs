use std::fmt;

/// Catalog identifier for a game.
///
/// The upstream catalog hands out numeric ids while the storefront routes and
/// banner records carry them as strings, so the id is kept in its string form
/// and deserializes from either representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        GameId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        GameId(value.to_string())
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        GameId(value)
    }
}

impl From<u64> for GameId {
    fn from(value: u64) -> Self {
        GameId(value.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GameId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => GameId(text),
            RawId::Unsigned(n) => GameId(n.to_string()),
            RawId::Signed(n) => GameId(n.to_string()),
        })
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::GameId;

    #[test]
    fn deserializes_numeric_and_string_ids_to_the_same_value() {
        let numeric: GameId = serde_json::from_str("3498").unwrap();
        let text: GameId = serde_json::from_str("\"3498\"").unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "3498");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = GameId::from(42u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
