//! digisearch 固有のドメイン型（型と不変条件）

pub mod cache;
pub mod catalog;
pub mod category;
pub mod command;
pub mod context;
pub mod error;
pub mod filter;
pub mod record;
pub mod request;
pub mod state;

#[allow(unused_imports)]
pub use cache::{CacheSlot, ResultCache};
pub use category::Category;
#[allow(unused_imports)]
pub use category::PerCategory;
pub use command::{InitialState, SearchCommand, SessionCommand};
#[allow(unused_imports)]
pub use context::CacheKey;
pub use context::SearchContext;
pub use error::SearchError;
pub use filter::CategoryFilter;
#[allow(unused_imports)]
pub use filter::{CardFilter, CreatureFilter, Filters};
pub use record::{CardRecord, CreatureRecord, Foreground, NormalizedRecord};
pub use request::RemoteRequest;
pub use state::{AppState, StateSummary, UiEvent};
