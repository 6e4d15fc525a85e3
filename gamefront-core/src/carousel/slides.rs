//! Tripled slide view for rendering

use gamefront_model::{Banner, BannerSet};
use uuid::Uuid;

use crate::constants::carousel::COPIES;

/// One rendered slide in the tripled strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide<'a> {
    /// Position in the strip, `0..COPIES * n`.
    pub virtual_index: usize,
    pub real_index: usize,
    /// Which copy of the list this slide belongs to (`1` is the middle).
    pub copy: usize,
    /// Key that is unique across copies and stable for the banner load.
    pub key: Uuid,
    pub banner: &'a Banner,
    pub is_current: bool,
    /// First banner of the middle copy, the landing slide after a load.
    pub is_middle_start: bool,
}

/// Stable per-load key for a slide.
pub fn slide_key(load_id: Uuid, copy: usize, real_index: usize) -> Uuid {
    Uuid::new_v5(&load_id, format!("{copy}:{real_index}").as_bytes())
}

/// Build the tripled strip for `banners`, marking `current_virtual`.
pub fn tripled(banners: &BannerSet, current_virtual: i64) -> Vec<Slide<'_>> {
    let n = banners.len();
    let load_id = banners.load_id();

    (0..COPIES)
        .flat_map(move |copy| {
            banners.iter().enumerate().map(move |(real_index, banner)| {
                let virtual_index = copy * n + real_index;
                Slide {
                    virtual_index,
                    real_index,
                    copy,
                    key: slide_key(load_id, copy, real_index),
                    banner,
                    is_current: virtual_index as i64 == current_virtual,
                    is_middle_start: copy == 1 && real_index == 0,
                }
            })
        })
        .collect()
}
