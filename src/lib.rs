//! wikiseek: search an online encyclopedia from the terminal.
//!
//! A run reads a search phrase, retrieves candidate articles through
//! [`wikiseek_search`], lists them, reads a choice and opens the article in
//! the default browser:
//!
//! query → retrieve → present → select → navigate
//!
//! # Architecture
//!
//! - **Console** ([`console`]): prompt, numbered listing and choice loop over
//!   any `BufRead`/`Write` pair
//! - **Navigator** ([`navigator`]): identifier, slug or title addressing, with
//!   the backend's own search page when nothing was found
//! - **Browser** ([`browser`]): hand-off to the platform opener
//! - **Session** ([`session`]): wires the steps together

pub mod browser;
pub mod console;
pub mod error;
pub mod navigator;
pub mod session;

pub use browser::{BrowserLauncher, SystemBrowser};
pub use error::{AppError, Result};
pub use navigator::{ArticleRef, Navigator};
pub use session::{Outcome, Session};
