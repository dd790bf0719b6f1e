//! Labelled axes: address dimensions by name and positions by key.

mod indexer;
mod tensor;

pub use indexer::DataIndexer;
pub use tensor::DataTensor;
