// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String),   // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing a frame to the window failed

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Writing the headless PNG failed

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),  // Flags that cannot work together
}
