pub const APP_NAME: &str = "fotafetch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = concat!("fotafetch/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_MANIFEST_FILE: &str = "checksums.json";
pub const HASH_CHUNK_SIZE: usize = 4096;
