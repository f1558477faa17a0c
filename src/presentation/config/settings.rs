use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Once;

pub const DEFAULT_THREADS: u32 = 4;
pub const DEFAULT_PROCESSORS: u32 = 1;
pub const DEFAULT_MODEL: &str = "small";
pub const DEFAULT_CUT_SECONDS: u32 = 0;
pub const DEFAULT_KEEP_FILES: bool = false;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9090;
const DEFAULT_WHISPER_BIN: &str = "whisper.cpp/main";
const DEFAULT_MODEL_DIR: &str = "whisper.cpp/models";
const DEFAULT_FFMPEG_BIN: &str = "ffmpeg";
const DEFAULT_WORK_DIR: &str = "whisper.cpp/samples";

static LOAD_DOTENV: Once = Once::new();

/// Runtime configuration, resolved once at startup and read-only afterwards.
/// Every request sees the same values through `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerSettings,
    pub whisper: WhisperSettings,
    pub media: MediaSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhisperSettings {
    pub model: String,
    pub threads: u32,
    pub processors: u32,
    pub binary: PathBuf,
    pub model_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaSettings {
    /// Truncate transcoded output to this many seconds; 0 disables.
    pub cut_seconds: u32,
    pub keep_files: bool,
    pub ffmpeg_binary: PathBuf,
    pub work_dir: PathBuf,
}

impl Settings {
    /// Resolves every setting as environment variable → `.env` file →
    /// hardcoded default. Never fails: a completely empty environment is a
    /// normal path that yields the defaults.
    pub fn resolve() -> Self {
        LOAD_DOTENV.call_once(|| match dotenvy::dotenv() {
            Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
            Err(_) => tracing::debug!("No .env file found, using environment and defaults"),
        });
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolution against an arbitrary key-value source, so tests can feed
    /// maps instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Self {
            server: ServerSettings {
                host: resolve_value(&lookup, "SERVER_HOST", DEFAULT_HOST.to_string()),
                port: resolve_value(&lookup, "SERVER_PORT", DEFAULT_PORT),
            },
            whisper: WhisperSettings {
                model: resolve_value(&lookup, "WHISPER_MODEL", DEFAULT_MODEL.to_string()),
                threads: resolve_value(&lookup, "WHISPER_THREADS", DEFAULT_THREADS),
                processors: resolve_value(&lookup, "WHISPER_PROCESSORS", DEFAULT_PROCESSORS),
                binary: PathBuf::from(resolve_value(
                    &lookup,
                    "WHISPER_BIN",
                    DEFAULT_WHISPER_BIN.to_string(),
                )),
                model_dir: PathBuf::from(resolve_value(
                    &lookup,
                    "WHISPER_MODEL_DIR",
                    DEFAULT_MODEL_DIR.to_string(),
                )),
            },
            media: MediaSettings {
                cut_seconds: resolve_value(&lookup, "CUT_MEDIA_SECONDS", DEFAULT_CUT_SECONDS),
                keep_files: resolve_flag(&lookup, "KEEP_FILES", DEFAULT_KEEP_FILES),
                ffmpeg_binary: PathBuf::from(resolve_value(
                    &lookup,
                    "FFMPEG_BIN",
                    DEFAULT_FFMPEG_BIN.to_string(),
                )),
                work_dir: PathBuf::from(resolve_value(
                    &lookup,
                    "WORK_DIR",
                    DEFAULT_WORK_DIR.to_string(),
                )),
            },
        };

        tracing::info!(model = %settings.whisper.model, "Selected model");

        settings
    }
}

/// The one fallback chain shared by all keys: present and parseable wins,
/// present but malformed warns and defaults, absent defaults quietly.
fn resolve_value<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, raw = %raw, %default, "Unparseable value, using default");
                default
            }
        },
        None => {
            tracing::debug!(key, %default, "No value found, using default");
            default
        }
    }
}

/// Boolean flags additionally accept "1", matching how operators commonly
/// set them in container environments.
fn resolve_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw == "1" || raw.to_lowercase() == "true",
        None => {
            tracing::debug!(key, default, "No value found, using default");
            default
        }
    }
}
