// Profile document analysis: PDF text → normalized lines → section classifier
// → per-section cleaning → ProfileRecord.
// Pure and synchronous; handlers push PDF extraction onto the blocking pool.

pub mod assembler;
pub mod classifier;
pub mod clean;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod normalize;

pub use assembler::ProfileRecord;
