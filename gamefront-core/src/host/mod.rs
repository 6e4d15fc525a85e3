//! Host-view glue between UI signals and the engines

pub mod banner_view;
pub mod feed_view;

pub use banner_view::BannerView;
pub use feed_view::FeedView;
