pub mod html;
pub mod scan;

pub use html::{class_attr_values, extract_classes};
pub use scan::{scan_files, ScanResult};
