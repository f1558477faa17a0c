mod settings;

pub use settings::{
    DEFAULT_CUT_SECONDS, DEFAULT_KEEP_FILES, DEFAULT_MODEL, DEFAULT_PROCESSORS, DEFAULT_THREADS,
    MediaSettings, ServerSettings, Settings, WhisperSettings,
};
