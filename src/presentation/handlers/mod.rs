pub mod envelope;
mod status;
mod subtitles;
mod transcribe;

pub use envelope::Envelope;
pub use status::status_handler;
pub use subtitles::subtitles_handler;
pub use transcribe::{transcribe_handler, transcribe_not_allowed};
