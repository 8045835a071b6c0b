pub mod blob;
pub mod store;
pub mod tables;

pub use blob::{AzureBlobClient, BlobStorage, LocalBlobStore};
pub use store::RotationStore;
