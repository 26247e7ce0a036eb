//! # tablero-core
//!
//! The pure logic of Tablero: the dataset model, validated decoding of
//! backend responses and the view seams the page controller drives.
//!
//! ## Architectural Constraints
//!
//! - No async, no network dependencies
//! - No I/O: views are traits, implemented by the app or by tests
//! - Every fallible operation returns `Result<T, TableroError>`

// =============================================================================
// MODULES
// =============================================================================

pub mod decode;
pub mod primitives;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use decode::{decode_rows, decode_upload_outcome};
pub use types::{FilePayload, Row, RowId, TableroError, UploadOutcome, number_text};
pub use view::{MemoryTable, Notifier, TableBody, UploadForm, render_rows};
