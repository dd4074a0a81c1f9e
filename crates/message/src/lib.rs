//! # Movie Queue Message
//!
//! Turning reply text into something the chat transport accepts.
//!
//! ## Pipeline
//!
//! ```text
//! free text (titles, provider names, error details)
//!     │
//!     ├──> escape_markdown
//!     │      └─> MarkdownV2-safe text
//!     │
//!     └──> MessageSplitter
//!            └─> ordered fragments, each under the transport limit
//! ```
//!
//! ## Example
//!
//! ```
//! use moviequeue_message::{escape_markdown, split_message};
//!
//! let text = format!("{}\n{}", escape_markdown("Heat (1995)"), escape_markdown("Alien!"));
//! let fragments = split_message(&text);
//! assert_eq!(fragments.len(), 1);
//! assert!(fragments[0].starts_with(r"Heat \(1995\)"));
//! ```

mod markdown;
mod splitter;

pub use markdown::{escape_code, escape_markdown, RESERVED_CHARACTERS};
pub use splitter::{split_message, MessageSplitter, SplitConfig, TELEGRAM_MESSAGE_LIMIT};
