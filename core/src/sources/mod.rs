pub mod local_git;
pub mod traits;

pub use local_git::GitSource;
pub use traits::{SourceOutput, StatusSource, StreamKind};
