pub mod entry_store;
pub mod search_service;
pub mod markdown_service;

pub use entry_store::{EntryStore, FileEntryStore, MemoryEntryStore};
pub use search_service::{SearchOutcome, SearchService};
pub use markdown_service::MarkdownService;
