// The mutable per-run stepper: one configuration, one transition per call.

use crate::automaton::{AcceptanceMode, Dpda};
use crate::symbols::{StateId, Sym};

/// Failure of a single [`Stepper::step`] call.
///
/// Callers are expected to branch on these as a normal outcome of
/// exploration, so both variants carry enough payload to self-correct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// The stack has no symbols; there is no top to match a rule against.
    /// Not retriable without starting a new run.
    #[error("stack is empty; no transition possible")]
    EmptyStack,
    /// No rule matches the attempted (state, input, stack top) triple.
    /// `legal` lists the inputs that would have been accepted instead.
    #[error(
        "no transition from state `{state}` with input `{input}` and stack top `{stack_top}`; legal inputs: [{}]",
        .legal.join(", ")
    )]
    NoTransition {
        state: String,
        input: String,
        stack_top: String,
        legal: Vec<String>,
    },
}

/// One interactive DPDA run.
///
/// Owns the mutable configuration (control state plus stack, bottom at index
/// 0) over a shared read-only [`Dpda`]. Single-threaded: `step` mutates in
/// place with no internal locking, so an instance belongs to exactly one
/// caller at a time.
#[derive(Debug)]
pub struct Stepper<'a> {
    dpda: &'a Dpda,
    state: StateId,
    stack: Vec<Sym>,
}

impl<'a> Stepper<'a> {
    /// Start a run at the initial state with a one-element stack holding the
    /// initial stack symbol.
    pub fn new(dpda: &'a Dpda) -> Self {
        Self {
            dpda,
            state: dpda.initial_state(),
            stack: vec![dpda.initial_stack_symbol()],
        }
    }

    /// Every input symbol (epsilon included, rendered as the empty string)
    /// with a defined rule from the current configuration.
    ///
    /// Returns an empty, sorted list when the stack is empty or the current
    /// state has no rule matching the stack top. Pure: calling this any
    /// number of times does not alter the configuration.
    pub fn legal_inputs(&self) -> Vec<&'a str> {
        let Some(&top) = self.stack.last() else {
            return Vec::new();
        };
        let mut names: Vec<&str> = self
            .dpda
            .inputs_for(self.state, top)
            .iter()
            .map(|&sym| self.dpda.symbols().sym_name(sym))
            .collect();
        names.sort_unstable();
        names
    }

    /// Apply exactly one transition for `input` (empty string = epsilon).
    ///
    /// On success the matched stack top is popped, the rule's push sequence
    /// is placed so that its leftmost symbol becomes the new top, and the
    /// control state moves to the rule's target. On failure the
    /// configuration is unchanged.
    pub fn step(&mut self, input: &str) -> Result<(), StepError> {
        let Some(&top) = self.stack.last() else {
            return Err(StepError::EmptyStack);
        };
        let dpda = self.dpda;
        let effect = dpda
            .symbols()
            .sym(input)
            .and_then(|sym| dpda.lookup(self.state, sym, top));
        let Some(effect) = effect else {
            return Err(self.no_transition(input, top));
        };

        self.stack.pop();
        // Reverse so the leftmost symbol of the push sequence ends up on top.
        self.stack.extend(effect.push.iter().rev().copied());
        self.state = effect.next;
        Ok(())
    }

    /// Read-only snapshot: state name and stack contents, bottom first.
    pub fn configuration(&self) -> (&'a str, Vec<&'a str>) {
        let symbols = self.dpda.symbols();
        let stack = self.stack.iter().map(|&sym| symbols.sym_name(sym)).collect();
        (symbols.state_name(self.state), stack)
    }

    /// Evaluate acceptance for the current configuration.
    pub fn is_accepting(&self) -> bool {
        match self.dpda.acceptance() {
            AcceptanceMode::FinalState => self.dpda.is_final(self.state),
            AcceptanceMode::EmptyStack => self.stack.is_empty(),
            // Defensive fallback for an unrecognized declared mode.
            AcceptanceMode::Unspecified => self.stack.is_empty(),
        }
    }

    fn no_transition(&self, input: &str, top: Sym) -> StepError {
        let symbols = self.dpda.symbols();
        StepError::NoTransition {
            state: symbols.state_name(self.state).to_string(),
            input: input.to_string(),
            stack_top: symbols.sym_name(top).to_string(),
            legal: self
                .legal_inputs()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
