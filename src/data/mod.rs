//! Data layer: the sample buffer type and file loading.
//!
//! ```text
//!  any binary file
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read all bytes → SampleBuffer
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ SampleBuffer  │  Vec<u8>, source name, plot title
//!   └──────────────┘
//! ```

pub mod loader;
pub mod model;
