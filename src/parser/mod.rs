pub mod clash;
pub mod de;

pub use clash::parse_clash_config;
