mod report;
mod validator;

pub use report::LineageReport;
pub use validator::LineageValidator;
