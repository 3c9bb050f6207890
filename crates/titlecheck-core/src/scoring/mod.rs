pub mod lexical;
pub mod phonetic;
pub mod policy;
pub mod verifier;

pub use phonetic::{metaphone, sounds_alike};
pub use policy::Policy;
pub use verifier::{BestMatch, Verifier};
