//! # Movie Queue Protocol
//!
//! Types shared by every crate of the bot: parsed chat commands, catalog snapshots,
//! streaming provider results and the error taxonomy of upstream collaborators.

mod command;
mod error;
mod item;
mod provider;

pub use command::{Command, Verb};
pub use error::{UpstreamError, UpstreamResult};
pub use item::{CatalogItem, MovieStatus, QueueId};
pub use provider::{ProviderMovie, ProviderResult};
