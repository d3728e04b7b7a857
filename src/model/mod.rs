pub mod data_core;
pub mod key_diff;
pub mod locale_merge;
pub mod locale_sync;
