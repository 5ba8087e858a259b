//! Dafny proof tooling around the simulator: a remote verification client
//! and a bounded generate/verify/repair loop.
//!
//! Both pieces are stateless collaborators: the verifier is one HTTP call
//! per source text, and the generation loop is a plain bounded iteration
//! around an externally supplied text generator. Neither holds state
//! between calls.
//!
//! # Architecture
//!
//! - [`verify`] -- HTTP client for the remote Dafny checker
//! - [`generate`] -- Text-generator boundary, code-fence extraction, and
//!   the bounded repair loop

pub mod generate;
pub mod verify;

pub use generate::{ProveConfig, TextGenerator, extract_code, prove};
pub use verify::{VerifyClient, Verdict};

/// Error type for verification and generation.
#[derive(Debug, thiserror::Error)]
pub enum DafnyError {
    /// The checker endpoint answered with a non-success HTTP status.
    #[error("verification endpoint returned status {status}")]
    EndpointUnavailable { status: u16 },
    /// The request never produced a usable response.
    #[error("verification request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The external text generator reported a failure.
    #[error("text generation failed: {0}")]
    Generation(String),
}
