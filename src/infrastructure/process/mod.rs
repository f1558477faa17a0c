mod tokio_runner;

pub use tokio_runner::TokioProcessRunner;
