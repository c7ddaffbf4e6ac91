pub mod hit;
pub mod paint;
pub mod smooth;
pub mod svg;

pub use hit::{hit_test, hit_test_rect};
pub use paint::paint_scene;
pub use smooth::{SMOOTHING, smooth_path};
pub use svg::svg_path_data;
