// JSON-friendly automaton definitions (the definition-provider boundary).
//
// A definition provider hands over the transition relation and run metadata
// as plain data; `build` turns it into an interned `Dpda`. Beyond what a
// lookup needs (valid names, unique rule keys) nothing is validated here:
// determinism of the relation remains the provider's responsibility.

use serde::{Deserialize, Serialize};

use crate::DpdaError;
use crate::automaton::{AcceptanceMode, Dpda};

/// One transition rule in a definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionDef {
    pub state: String,
    /// Input symbol; the empty string (or an omitted field) is an epsilon move.
    #[serde(default)]
    pub input: String,
    pub stack_top: String,
    pub next_state: String,
    /// Symbols pushed in place of the popped top, leftmost on top afterwards.
    /// Omitted or empty: the popped symbol is simply removed.
    #[serde(default)]
    pub push: Vec<String>,
}

/// A complete automaton definition as supplied by a definition provider.
///
/// ```json
/// {
///   "initial_state": "q0",
///   "initial_stack_symbol": "Z",
///   "final_states": ["q1"],
///   "acceptance_mode": "final_state",
///   "transitions": [
///     { "state": "q0", "input": "a", "stack_top": "Z",
///       "next_state": "q1", "push": ["X", "Z"] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DpdaDefinition {
    pub initial_state: String,
    pub initial_stack_symbol: String,
    #[serde(default)]
    pub final_states: Vec<String>,
    pub acceptance_mode: AcceptanceMode,
    pub transitions: Vec<TransitionDef>,
}

impl DpdaDefinition {
    /// Parse a definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DpdaError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Intern the definition into an immutable [`Dpda`].
    pub fn build(&self) -> Result<Dpda, DpdaError> {
        let mut builder = Dpda::builder()
            .initial_state(&self.initial_state)
            .initial_stack_symbol(&self.initial_stack_symbol)
            .acceptance(self.acceptance_mode);
        for name in &self.final_states {
            builder = builder.final_state(name);
        }
        for t in &self.transitions {
            let push: Vec<&str> = t.push.iter().map(String::as_str).collect();
            builder = builder.rule(&t.state, &t.input, &t.stack_top, &t.next_state, &push);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUSH_MACHINE: &str = r#"{
        "initial_state": "q0",
        "initial_stack_symbol": "Z",
        "final_states": ["q1"],
        "acceptance_mode": "final_state",
        "transitions": [
            { "state": "q0", "input": "a", "stack_top": "Z",
              "next_state": "q1", "push": ["X", "Z"] }
        ]
    }"#;

    #[test]
    fn parse_and_build() {
        let def = DpdaDefinition::from_json(PUSH_MACHINE).unwrap();
        assert_eq!(def.acceptance_mode, AcceptanceMode::FinalState);

        let dpda = def.build().unwrap();
        let mut stepper = dpda.stepper();
        stepper.step("a").unwrap();
        assert_eq!(stepper.configuration(), ("q1", vec!["Z", "X"]));
    }

    #[test]
    fn omitted_input_and_push_default_to_epsilon_and_empty() {
        let text = r#"{
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "acceptance_mode": "empty_stack",
            "transitions": [
                { "state": "q0", "stack_top": "Z", "next_state": "q0" }
            ]
        }"#;
        let dpda = DpdaDefinition::from_json(text).unwrap().build().unwrap();
        let mut stepper = dpda.stepper();
        assert_eq!(stepper.legal_inputs(), vec![""]);
        stepper.step("").unwrap();
        assert!(stepper.is_accepting());
    }

    #[test]
    fn unrecognized_acceptance_mode_maps_to_unspecified() {
        let text = r#"{
            "initial_state": "q0",
            "initial_stack_symbol": "Z",
            "acceptance_mode": "both",
            "transitions": []
        }"#;
        let def = DpdaDefinition::from_json(text).unwrap();
        assert_eq!(def.acceptance_mode, AcceptanceMode::Unspecified);
    }

    #[test]
    fn malformed_json_is_a_definition_error() {
        let err = DpdaDefinition::from_json("{").unwrap_err();
        assert!(matches!(err, DpdaError::Definition(_)));
    }

    #[test]
    fn acceptance_mode_round_trips_as_snake_case() {
        let json = serde_json::to_string(&AcceptanceMode::EmptyStack).unwrap();
        assert_eq!(json, "\"empty_stack\"");
        let back: AcceptanceMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AcceptanceMode::EmptyStack);
    }
}
