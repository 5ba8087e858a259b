// Identifier interning: state and symbol names as integer-backed tags.
//
// Interning happens once, while an automaton is built. Afterwards every
// lookup and comparison in the stepper works on `u16` tags, and a name that
// was never interned is detectable before any run starts.

use hashbrown::HashMap;

use crate::DpdaError;

/// Interned control-state identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub u16);

/// Interned symbol identifier, shared by the input and stack alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sym(pub u16);

/// Epsilon: the empty input symbol. Always interned at index 0.
pub const EPSILON: Sym = Sym(0);

/// Bidirectional name tables for states and symbols.
///
/// States and symbols live in separate namespaces: a state `X` and a stack
/// symbol `X` are unrelated identifiers with unrelated tags.
#[derive(Debug, Default)]
pub struct SymbolTable {
    state_names: Vec<String>,
    state_ids: HashMap<String, StateId>,
    sym_names: Vec<String>,
    sym_ids: HashMap<String, Sym>,
}

impl SymbolTable {
    /// Create an empty table with epsilon pre-interned at symbol index 0.
    pub fn new() -> Self {
        let mut table = Self::default();
        table.sym_names.push(String::new());
        table.sym_ids.insert(String::new(), EPSILON);
        table
    }

    /// Intern a state name, returning its existing tag if already known.
    pub fn intern_state(&mut self, name: &str) -> Result<StateId, DpdaError> {
        if let Some(&id) = self.state_ids.get(name) {
            return Ok(id);
        }
        let index = u16::try_from(self.state_names.len()).map_err(|_| DpdaError::TooManyStates)?;
        let id = StateId(index);
        self.state_names.push(name.to_string());
        self.state_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Intern a symbol name, returning its existing tag if already known.
    ///
    /// The empty string maps to [`EPSILON`].
    pub fn intern_sym(&mut self, name: &str) -> Result<Sym, DpdaError> {
        if let Some(&sym) = self.sym_ids.get(name) {
            return Ok(sym);
        }
        let index = u16::try_from(self.sym_names.len()).map_err(|_| DpdaError::TooManySymbols)?;
        let sym = Sym(index);
        self.sym_names.push(name.to_string());
        self.sym_ids.insert(name.to_string(), sym);
        Ok(sym)
    }

    /// Look up a state tag by name.
    pub fn state(&self, name: &str) -> Option<StateId> {
        self.state_ids.get(name).copied()
    }

    /// Look up a symbol tag by name. The empty string resolves to epsilon.
    pub fn sym(&self, name: &str) -> Option<Sym> {
        self.sym_ids.get(name).copied()
    }

    /// The name behind a state tag.
    pub fn state_name(&self, id: StateId) -> &str {
        &self.state_names[id.0 as usize]
    }

    /// The name behind a symbol tag. Epsilon renders as the empty string.
    pub fn sym_name(&self, sym: Sym) -> &str {
        &self.sym_names[sym.0 as usize]
    }

    /// Number of interned states.
    pub fn state_count(&self) -> usize {
        self.state_names.len()
    }

    /// Number of interned symbols, epsilon included.
    pub fn sym_count(&self) -> usize {
        self.sym_names.len()
    }
}
