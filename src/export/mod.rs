pub mod writer;

pub use writer::{ArtifactWriter, UTF8_BOM};
