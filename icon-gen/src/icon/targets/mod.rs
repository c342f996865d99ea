mod png;

pub use png::process_png_target;
