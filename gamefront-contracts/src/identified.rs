use std::fmt::Debug;
use std::hash::Hash;

use gamefront_model::{Banner, Game, GameId};

/// Anything that carries a stable identity the feed can deduplicate on.
pub trait Identified {
    type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
}

impl Identified for Game {
    type Id = GameId;

    fn id(&self) -> &GameId {
        &self.id
    }
}

impl Identified for Banner {
    type Id = GameId;

    fn id(&self) -> &GameId {
        &self.id
    }
}
