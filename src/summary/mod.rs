mod dataset_summary;

pub use dataset_summary::DatasetSummary;
