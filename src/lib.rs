// A chain of shrinking discs that follows the mouse, drawn in software.

pub mod animator;
pub mod config;
pub mod draw;
pub mod error;
pub mod gamma;
pub mod pointer;
pub mod snapshot;
pub mod surface;
pub mod trail;
pub mod types;
