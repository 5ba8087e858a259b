//! Incremental, interactive simulator for deterministic pushdown automata.
//!
//! This crate provides a symbol-by-symbol stepper over a DPDA configuration
//! (control state plus explicit stack). An external caller drives one run:
//! it asks which input symbols are currently legal, applies exactly one of
//! them, and optionally checks acceptance after each step. There is no batch
//! string acceptance; exploration is the intended use.
//!
//! # Architecture
//!
//! - [`symbols`] -- Identifier interning (states and symbols as integer tags)
//! - [`automaton`] -- Immutable transition relation, builder, acceptance mode
//! - [`definition`] -- JSON definition format (definition-provider boundary)
//! - [`stepper`] -- The mutable per-run stepper

pub mod automaton;
pub mod definition;
pub mod stepper;
pub mod symbols;

pub use automaton::{AcceptanceMode, Dpda, DpdaBuilder};
pub use definition::{DpdaDefinition, TransitionDef};
pub use stepper::{StepError, Stepper};

/// Error type for automaton construction and definition parsing.
#[derive(Debug, thiserror::Error)]
pub enum DpdaError {
    #[error("initial state is not set")]
    MissingInitialState,
    #[error("initial stack symbol is not set")]
    MissingInitialStackSymbol,
    #[error("duplicate rule for state `{state}`, input `{input}`, stack top `{stack_top}`")]
    DuplicateRule {
        state: String,
        input: String,
        stack_top: String,
    },
    #[error("too many distinct state identifiers (limit {})", u16::MAX)]
    TooManyStates,
    #[error("too many distinct symbol identifiers (limit {})", u16::MAX)]
    TooManySymbols,
    #[error("invalid definition: {0}")]
    Definition(#[from] serde_json::Error),
}
