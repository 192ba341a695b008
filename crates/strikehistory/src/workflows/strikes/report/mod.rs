mod context;
mod text;

pub use context::{ContractorIdentity, ReportContext, ReportVariant, RequesterIdentity};
pub use text::{file_name, synthesize, NOT_PROVIDED};
