pub mod deck;
pub mod models;
pub mod prompts;

mod time;
pub use time::now_iso8601;

pub use deck::{Deck, Slide};
pub use models::{Session, UserDb, UserInfo, UserRecord};
