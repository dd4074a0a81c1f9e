//! # Movie Queue Dispatch
//!
//! Everything between a parsed chat command and the messages handed to the transport.
//!
//! ## Pipeline
//!
//! ```text
//! Command
//!     │
//!     ├──> router (argument check, catalog calls, resolver, provider aggregation)
//!     │      └─> Reply::{Text, Choice, Error}
//!     │
//!     └──> render (escape error text, split into fragments)
//!            └─> [OutboundMessage] ──> Transport
//! ```

mod error;
mod format;
mod keyboard;
mod render;
mod reply;
mod router;
mod transport;

pub use error::{classify, ClassifiedError, DispatchError, ErrorKind};
pub use keyboard::{build_rows, choices, DisambiguationChoice};
pub use render::render;
pub use reply::{ChoiceKeyboard, ChoiceReply, ErrorReply, KeyboardAction, Reply, TextReply};
pub use router::Dispatcher;
pub use transport::{deliver, ChatTarget, OutboundMessage, ReplyMarkup, Transport};
