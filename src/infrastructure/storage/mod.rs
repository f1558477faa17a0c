mod work_dir_store;

pub use work_dir_store::WorkDirStore;
