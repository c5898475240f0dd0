//! Newsletter rendering and delivery.

mod email;
mod generator;

pub use email::{DigestSender, EmailSender, SmtpSettings};
pub use generator::{Digest, DigestGenerator, DIGEST_SUBJECT};
