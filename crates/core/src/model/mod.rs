mod category;
mod certificate;
mod exam_config;
mod pagination;
mod question;
mod result;
mod session;

pub use category::{ExamCategory, ParseCategoryError};
pub use certificate::{
    CertificateError, IndividualCertificate, MasterCertificate, MasterStats,
    format_certificate_date,
};
pub use exam_config::{ExamConfig, ExamConfigError};
pub use pagination::{PAGE_SIZE, Pagination};
pub use question::{Question, QuestionError};
pub use result::{ExamResult, ExamResultError};
pub use session::{
    CompletionReason, ExamPhase, ExamProgress, ExamSession, SessionError, TickOutcome,
};
