mod event;
mod walk;

pub use event::{FileFound, FileRecord};
pub use walk::{WalkRequest, walk};
