use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment.
///
/// Function values capture their definition environment through this handle,
/// and a call frame's environment points at its enclosing one the same way.
/// The reference count keeps a captured environment alive for as long as any
/// closure can still reach through it. Cycles cannot form: a child only ever
/// points outward.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A lexically scoped mapping from names to values.
///
/// Lookup walks the chain from the innermost environment outward; writes
/// always land in the innermost one, so an inner `let` shadows an outer
/// binding instead of overwriting it.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<SharedEnv>,
}

impl Environment {
    /// Creates a fresh environment with no enclosing parent.
    #[must_use]
    pub fn new() -> SharedEnv {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment chained to `outer`.
    ///
    /// Used for every function call frame: parameters bind here while names
    /// from the closure's definition site stay visible through the chain.
    #[must_use]
    pub fn new_enclosed(outer: &SharedEnv) -> SharedEnv {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks up `name`, walking outward through enclosing environments.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer
                        .as_ref()
                        .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this environment only.
    ///
    /// Never touches enclosing environments; rebinding an outer name here
    /// shadows it for this scope and anything enclosed in it.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
