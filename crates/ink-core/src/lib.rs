pub mod id;
pub mod model;
pub mod store;
pub mod viewport;

pub use id::ShapeId;
pub use model::*;
pub use store::ShapeStore;
pub use viewport::{MAX_ZOOM, MIN_ZOOM, Viewport, ZOOM_STEP};
