pub mod entry;
pub mod scored;
