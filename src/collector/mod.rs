pub mod bundle_writer;
pub mod file_collector;
pub mod summary;

pub use bundle_writer::{sort_records, BundleWriter};
pub use file_collector::{CollectionEvent, CollectionProgress, FileCollector, FileRecord};
pub use summary::CollectionSummary;
