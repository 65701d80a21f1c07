//! ircflow
//!
//! Reflow and selection for IRC attributed text. Lines carrying mIRC
//! control codes are broken into sublines that fit a pixel width, the
//! sublines can be hit-tested by pointer position, and a selection over
//! them survives a resize by being carried through absolute character
//! offsets.
//!
//! ```
//! use ircflow::measure::MonospaceMeasure;
//! use ircflow::TextView;
//!
//! let mut view = TextView::new(MonospaceMeasure::new(7, 14), 35);
//! view.set_buffer(["\x02hello\x02 world"]);
//! view.reflow(35);
//! assert_eq!(view.sublines().len(), 2);
//!
//! view.press(0.0, 0.0);
//! assert_eq!(view.release(35.0, 14.0).as_deref(), Some("hello world"));
//! ```

pub mod clipboard;
pub mod config;
pub mod format;
pub mod measure;
pub mod position;
pub mod render;
pub mod scanner;
pub mod selection;
pub mod view;
pub mod wrap;

pub use config::Config;
pub use format::{Color, ColorCode, ControlCode, StyleState};
pub use measure::Measure;
pub use position::CharHit;
pub use scanner::strip;
pub use selection::{Selection, SelectionEndpoint, SelectionError};
pub use view::TextView;
pub use wrap::{break_line, LineBreaker, Subline};
