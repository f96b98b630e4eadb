pub mod reader;
pub mod resolver;
pub mod writer;

pub use reader::{convenience, FrontMatterReader};
pub use resolver::{classify, file_job, is_source_file, ConversionJob, DirectoryWalker, InputKind};
pub use writer::{ensure_dir, write_file, write_mdx};
