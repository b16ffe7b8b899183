pub mod page;
pub mod page_list;
pub mod search;

pub use page::Page;
pub use page_list::{PageList, ParsedEntry, promote_searches_to_destinations};
pub use search::{DEFAULT_SEARCH_PROVIDER, SearchProvider};
