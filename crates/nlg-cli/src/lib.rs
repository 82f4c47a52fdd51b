//! Library side of the `newsletter-studio` binary: logging, the state file,
//! the inspect workflow and generation against the saved subscription.

pub mod generate;
pub mod inspect;
pub mod logging;
pub mod state;
