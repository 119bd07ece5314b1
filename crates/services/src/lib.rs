#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog;
pub mod certification;
pub mod error;
pub mod observers;
pub mod results_service;
pub mod sessions;

pub use exam_core::Clock;

pub use app_services::AppServices;
pub use catalog::{CatalogEntry, ExamCatalog};
pub use certification::{CertificationService, CertificationStatus};
pub use error::{AppServicesError, CertificationError, ExamError};
pub use observers::{CompletionHub, ExamCompletionObserver};
pub use results_service::ResultService;
pub use sessions::{ExamCompletion, ExamRunner};
