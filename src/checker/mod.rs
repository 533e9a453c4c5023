pub mod check_result;
pub mod engine;

pub use check_result::CheckResult;
pub use engine::PaperChecker;
