pub mod error;
pub mod select;
pub mod size;
pub mod walker;

pub use error::{FmaxError, Result};
pub use select::max_by_score;
pub use size::format_size;
pub use walker::{FileFound, FileRecord, WalkRequest, walk};
