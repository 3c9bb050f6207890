pub mod result;

pub use result::{ACCEPTED_REASON, RESTRICTED_REASON, Status, VerificationResult};
