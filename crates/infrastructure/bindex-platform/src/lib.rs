pub mod cache;
pub mod client;
pub mod fixtures;
pub mod navigation;
pub mod net;

pub use cache::CachedBindings;
pub use client::{PlatformClient, PlatformError};
pub use fixtures::FixturePlatform;
