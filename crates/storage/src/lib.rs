#![forbid(unsafe_code)]

pub mod exam_store;
pub mod records;
pub mod repository;
pub mod sqlite;

pub use repository::{
    CertificateRepository, ExamResultRepository, InMemoryStore, KeyValueStore, LabProgress,
    LabProgressRepository, Storage, StorageError,
};
