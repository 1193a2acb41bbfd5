pub mod mediainfo;
pub mod metadata;

pub use mediainfo::analyze;
pub use metadata::MediaSummary;
