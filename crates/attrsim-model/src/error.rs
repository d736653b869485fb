use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("dataset is empty; nothing to analyze")]
    EmptyDataset,
}
