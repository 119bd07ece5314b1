mod runner;

pub(crate) use runner::RunnerShared;
pub use runner::{ExamCompletion, ExamRunner};
