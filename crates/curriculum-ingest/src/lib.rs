pub mod discovery;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod records;

pub use discovery::{expand_transcript_inputs, list_json_files};
pub use error::{IngestError, Result};
pub use loader::{LoadedTranscript, load_transcript, read_transcript_record};
pub use normalize::normalize_transcript;
pub use records::{CourseRecord, RawNumber, RawYear, SemesterRecord, TranscriptRecord};
