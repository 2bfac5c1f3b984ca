//! Email delivery
//!
//! - [`traits`] - the [`Mailer`] seam and [`EmailMessage`]
//! - [`ses`] - Amazon SES implementation

pub mod ses;
pub mod traits;

pub use ses::SesMailer;
pub use traits::{EmailMessage, Mailer};
