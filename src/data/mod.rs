// Historical dataset loading
pub mod history;

// Re-export commonly used types
pub use history::{DatasetError, HistoryDataset, load_embedded};
