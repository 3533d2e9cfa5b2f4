//! Rolodex text menu.
//!
//! Sans-IO menu session over a [`ContactDirectory`], plus the line driver used
//! by the `rolodex` binary.
//!
//! ## Architecture
//!
//! ```text
//! rolodex (binary)
//!   └─ run()               (stdin/stdout line driver)
//!        └─ Session        (menu state machine, events in / actions out)
//!             ├─ MenuChoice  (option parsing)
//!             ├─ render      (tables, tallies, banners)
//!             └─ ContactDirectory
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod menu;
pub mod render;
mod session;

pub use config::{BannerStyle, SessionConfig};
pub use driver::run;
pub use error::{CliError, MenuError};
pub use menu::MenuChoice;
pub use rolodex_core::{Contact, ContactDirectory, ContactId, DirectoryError, LetterTally};
pub use session::{Session, SessionAction, SessionEvent};
