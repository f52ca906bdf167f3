pub mod dates;

pub use dates::DateSequence;
