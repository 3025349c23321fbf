//! Icon generation support.
//!
//! Framing a prefab for its thumbnail and deciding which thumbnails of a
//! batch actually need rendering. Rendering and image encoding belong to
//! the host.

mod batch;
mod framer;

pub use batch::{
    clear_icon_dir, icon_path, IconBatch, IconEntry, IconStatus,
    ICON_EXTENSION,
};
pub use framer::{FramedIcon, IconFramer};
