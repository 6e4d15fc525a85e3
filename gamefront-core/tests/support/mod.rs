#![allow(dead_code)]

use std::sync::Arc;

use gamefront_core::model::Game;
use gamefront_core::time::ManualClock;

pub fn game(id: u64) -> Game {
    Game::new(id, format!("Game {id}"))
}

pub fn page(ids: &[u64]) -> Vec<Game> {
    ids.iter().copied().map(game).collect()
}

pub fn ids(items: &[Game]) -> Vec<String> {
    items.iter().map(|g| g.id.to_string()).collect()
}

pub fn manual_clock() -> (ManualClock, Arc<ManualClock>) {
    let clock = ManualClock::new();
    let shared = Arc::new(clock.clone());
    (clock, shared)
}
