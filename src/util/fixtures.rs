use std::path::{Path, PathBuf};

pub const CROSSING_FIRST: &str = "crossing_first.json";
pub const CROSSING_SECOND: &str = "crossing_second.json";
pub const BARE_OFFSET: &str = "bare_offset.json";
pub const INVALID_TIME: &str = "invalid_time.json";

pub fn fixture_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("fixtures")
        .join(file)
}
