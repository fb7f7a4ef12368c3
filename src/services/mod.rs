pub mod note_writer;
pub mod question_sampler;
pub mod section_splitter;
pub mod source_reader;

pub use note_writer::{NoteWriter, WriteMode};
pub use question_sampler::{render_blocks, sample, sample_blocks, SampledBlock};
pub use section_splitter::split;
pub use source_reader::{read_or_default, SourceKind, SourceText};
