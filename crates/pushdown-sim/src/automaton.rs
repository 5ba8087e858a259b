// Immutable DPDA: transition relation, metadata, and the builder.
//
// The relation is stored twice: a flat map keyed by the full
// (state, input, stack top) triple for `step`, and a (state, stack top)
// index for `legal_inputs`. Both are single keyed lookups. Determinism of
// the relation is assumed, not validated; only exact duplicate triples are
// rejected while building.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::DpdaError;
use crate::stepper::Stepper;
use crate::symbols::{StateId, Sym, SymbolTable};

/// How a configuration is judged accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceptanceMode {
    /// Accept iff the current state is in the final-state set.
    FinalState,
    /// Accept iff the stack is empty.
    EmptyStack,
    /// Any other declared mode. [`Stepper::is_accepting`] falls back to the
    /// empty-stack check; definitions should not rely on this.
    #[serde(other)]
    Unspecified,
}

/// Full transition key: current state, consumed input, required stack top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RuleKey {
    pub state: StateId,
    pub input: Sym,
    pub top: Sym,
}

/// What a matched rule does: move to `next`, replace the popped top with
/// `push` (leftmost element of `push` becomes the new top).
#[derive(Debug, Clone)]
pub(crate) struct RuleEffect {
    pub next: StateId,
    pub push: Vec<Sym>,
}

/// An immutable deterministic pushdown automaton.
///
/// Holds the interned transition relation and the run metadata (initial
/// state, initial stack symbol, final states, acceptance mode). A `Dpda` is
/// read-only and may be shared across any number of independently owned
/// [`Stepper`]s.
#[derive(Debug)]
pub struct Dpda {
    symbols: SymbolTable,
    rules: HashMap<RuleKey, RuleEffect>,
    /// Inputs with a defined rule per (state, stack top). A deterministic
    /// relation has at most one entry per key; extras are kept as supplied
    /// and the first matching rule wins during `step`.
    guards: HashMap<(StateId, Sym), Vec<Sym>>,
    initial_state: StateId,
    initial_stack_symbol: Sym,
    final_states: Vec<StateId>,
    acceptance: AcceptanceMode,
}

impl Dpda {
    /// Start building an automaton.
    pub fn builder() -> DpdaBuilder {
        DpdaBuilder::new()
    }

    /// Create a fresh stepper positioned at the initial configuration.
    pub fn stepper(&self) -> Stepper<'_> {
        Stepper::new(self)
    }

    /// The declared acceptance mode.
    pub fn acceptance(&self) -> AcceptanceMode {
        self.acceptance
    }

    pub(crate) fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(crate) fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub(crate) fn initial_stack_symbol(&self) -> Sym {
        self.initial_stack_symbol
    }

    pub(crate) fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// Single keyed lookup of the full transition triple.
    pub(crate) fn lookup(&self, state: StateId, input: Sym, top: Sym) -> Option<&RuleEffect> {
        self.rules.get(&RuleKey { state, input, top })
    }

    /// Inputs with a defined rule from `state` when `top` is on the stack.
    pub(crate) fn inputs_for(&self, state: StateId, top: Sym) -> &[Sym] {
        match self.guards.get(&(state, top)) {
            Some(inputs) => inputs,
            None => &[],
        }
    }
}

struct RawRule {
    state: String,
    input: String,
    stack_top: String,
    next_state: String,
    push: Vec<String>,
}

/// Builder for [`Dpda`].
///
/// Collects names as plain strings; `build` interns everything, so identifier
/// problems (and exact duplicate rule keys) surface before the first run.
pub struct DpdaBuilder {
    initial_state: Option<String>,
    initial_stack_symbol: Option<String>,
    final_states: Vec<String>,
    acceptance: AcceptanceMode,
    rules: Vec<RawRule>,
}

impl DpdaBuilder {
    fn new() -> Self {
        Self {
            initial_state: None,
            initial_stack_symbol: None,
            final_states: Vec::new(),
            acceptance: AcceptanceMode::FinalState,
            rules: Vec::new(),
        }
    }

    /// Set the initial control state. Required.
    #[must_use]
    pub fn initial_state(mut self, name: &str) -> Self {
        self.initial_state = Some(name.to_string());
        self
    }

    /// Set the initial stack symbol (the one-element starting stack). Required.
    #[must_use]
    pub fn initial_stack_symbol(mut self, name: &str) -> Self {
        self.initial_stack_symbol = Some(name.to_string());
        self
    }

    /// Add a state to the final-state set.
    #[must_use]
    pub fn final_state(mut self, name: &str) -> Self {
        self.final_states.push(name.to_string());
        self
    }

    /// Set the acceptance mode. Defaults to [`AcceptanceMode::FinalState`].
    #[must_use]
    pub fn acceptance(mut self, mode: AcceptanceMode) -> Self {
        self.acceptance = mode;
        self
    }

    /// Add one transition rule.
    ///
    /// `input` may be the empty string for an epsilon move. `push` is read
    /// left to right as top to bottom after the rule fires; an empty `push`
    /// just removes the popped top.
    #[must_use]
    pub fn rule(
        mut self,
        state: &str,
        input: &str,
        stack_top: &str,
        next_state: &str,
        push: &[&str],
    ) -> Self {
        self.rules.push(RawRule {
            state: state.to_string(),
            input: input.to_string(),
            stack_top: stack_top.to_string(),
            next_state: next_state.to_string(),
            push: push.iter().map(|s| (*s).to_string()).collect(),
        });
        self
    }

    /// Intern all names and assemble the automaton.
    pub fn build(self) -> Result<Dpda, DpdaError> {
        let initial_state_name = self.initial_state.ok_or(DpdaError::MissingInitialState)?;
        let initial_stack_name = self
            .initial_stack_symbol
            .ok_or(DpdaError::MissingInitialStackSymbol)?;

        let mut symbols = SymbolTable::new();
        let initial_state = symbols.intern_state(&initial_state_name)?;
        let initial_stack_symbol = symbols.intern_sym(&initial_stack_name)?;

        let mut final_states = Vec::with_capacity(self.final_states.len());
        for name in &self.final_states {
            let id = symbols.intern_state(name)?;
            if !final_states.contains(&id) {
                final_states.push(id);
            }
        }

        let mut rules: HashMap<RuleKey, RuleEffect> = HashMap::with_capacity(self.rules.len());
        let mut guards: HashMap<(StateId, Sym), Vec<Sym>> = HashMap::new();

        for raw in &self.rules {
            let key = RuleKey {
                state: symbols.intern_state(&raw.state)?,
                input: symbols.intern_sym(&raw.input)?,
                top: symbols.intern_sym(&raw.stack_top)?,
            };
            if rules.contains_key(&key) {
                return Err(DpdaError::DuplicateRule {
                    state: raw.state.clone(),
                    input: raw.input.clone(),
                    stack_top: raw.stack_top.clone(),
                });
            }
            let next = symbols.intern_state(&raw.next_state)?;
            let mut push = Vec::with_capacity(raw.push.len());
            for name in &raw.push {
                push.push(symbols.intern_sym(name)?);
            }
            guards
                .entry((key.state, key.top))
                .or_default()
                .push(key.input);
            rules.insert(key, RuleEffect { next, push });
        }

        Ok(Dpda {
            symbols,
            rules,
            guards,
            initial_state,
            initial_stack_symbol,
            final_states,
            acceptance: self.acceptance,
        })
    }
}
