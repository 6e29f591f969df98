//! DailyNewzz Core - onboarding, preferences and headline formatting.
//!
//! This crate holds everything that does not depend on a particular chat
//! platform:
//!
//! - **genre**: the fixed, ordered genre catalog
//! - **selection**: turning a free-text reply into a genre
//! - **preferences**: per-user onboarding state
//! - **news**: the top-headlines HTTP client and its trait seam
//! - **formatter**: rendering articles and splitting long messages
//! - **controller**: the interaction state machine tying it together
//! - **config**: environment-driven startup configuration

pub mod config;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod genre;
pub mod messages;
pub mod news;
pub mod preferences;
pub mod selection;

pub use config::{config_dir, env_file, BotConfig};
pub use controller::{Channel, Command, Controller, ReplySink};
pub use error::{ConfigError, NewsError, Result};
pub use formatter::{format_headlines, split_message, MESSAGE_LIMIT};
pub use genre::{Genre, CATALOG};
pub use news::{Article, HeadlinesResponse, NewsApiClient, NewsSource};
pub use preferences::{Onboarding, PreferenceState, PreferenceStore, UserId};
pub use selection::{parse_selection, Selection};
