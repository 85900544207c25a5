//! Testing utilities
//!
//!     Emphasis rules have corners that are easy to get wrong by hand (bold inside an open
//!     italic span, `__` followed by whitespace, escapes next to delimiters). Rather than
//!     scattering ad-hoc strings and guessed outputs across test files, integration tests
//!     draw from a curated corpus under `docs/samples/`:
//!
//!         NNN-hint.md     the source
//!         NNN-hint.html   the expected rendering
//!
//!     Use [`Samples`](samples::Samples) to load them:
//!
//!     ```rust,ignore
//!     use mdlite::mdlite::testing::samples::Samples;
//!
//!     let sample = Samples::get(3)?;
//!     assert_eq!(sample.render()?, sample.expected_html());
//!
//!     for sample in Samples::all()? {
//!         assert_eq!(sample.render()?, sample.expected_html(), "{}", sample.name());
//!     }
//!     ```

pub mod samples;

pub use samples::{Sample, SampleError, Samples};
