mod engine;
mod fallback;
mod info;
pub mod matcher;

pub use engine::ClassificationEngine;
pub use fallback::DeviceFallback;
pub use info::{BrowserInfo, DeviceInfo, Info, OsInfo};
pub use matcher::{
    find_first_match, find_first_match_with_version, MatchHit, VersionExtraction,
};
