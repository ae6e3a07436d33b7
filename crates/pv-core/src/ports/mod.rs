//! Port interfaces for the gallery
//!
//! Ports define the contract between the gallery logic and the host
//! capabilities backing it. This keeps the core independent of any concrete
//! platform: an embedder injects one implementation per port, and the
//! gallery only ever talks to these traits.

mod camera;
mod clock;
mod errors;
mod file_store;
mod key_value;

pub use camera::{CameraPort, CaptureRequest, CaptureSource, CapturedPhoto};
pub use clock::ClockPort;
pub use errors::CameraError;
pub use file_store::FileStorePort;
pub use key_value::KeyValueStorePort;
