//! ユースケース層（検索・対話セッション、およびその部品）

pub mod normalizer;
pub mod router;
pub mod search;
pub mod session;

#[allow(unused_imports)]
pub use search::{FetchTicket, ResultSource, SearchPlan, SearchResult};
pub use search::SearchUseCase;
pub use session::SessionUseCase;
