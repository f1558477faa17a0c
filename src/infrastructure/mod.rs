pub mod media;
pub mod observability;
pub mod process;
pub mod storage;
