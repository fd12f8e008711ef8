use std::collections::HashMap;

use crate::interpreter::value::core::Object;

/// A handle to one scope in the environment arena.
///
/// Handles are plain indices: copyable, comparable, and free of ownership.
/// A function value captures its defining scope by storing its handle, so
/// recursive closures never form reference cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvId(usize);

/// One lexical scope: a name→value table plus an optional parent link.
#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Object>,
    parent:   Option<EnvId>,
}

/// The arena owning every scope created during evaluation.
///
/// The arena starts with the global scope and grows by one scope per
/// function application. Scopes are never removed: a closure may keep its
/// defining scope reachable indefinitely, and the arena is the single owner
/// of all of them.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Creates an arena holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Returns the handle of the global scope.
    #[must_use]
    pub const fn global(&self) -> EnvId {
        EnvId(0)
    }

    /// Creates a fresh scope enclosed by `parent` and returns its handle.
    ///
    /// Called on function application: the parent is the function's
    /// *captured* environment, not the caller's. This is the sole mechanism
    /// realizing lexical closures.
    ///
    /// # Example
    /// ```
    /// use vervet::interpreter::value::{core::Object, environment::Environment};
    ///
    /// let mut envs = Environment::new();
    /// let global = envs.global();
    /// envs.set(global, "x", Object::Integer(1));
    ///
    /// let inner = envs.enclosed(global);
    /// assert_eq!(envs.get(inner, "x"), Some(&Object::Integer(1)));
    /// ```
    pub fn enclosed(&mut self, parent: EnvId) -> EnvId {
        let id = EnvId(self.scopes.len());
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 parent:   Some(parent), });
        id
    }

    /// Looks up a name, climbing the parent chain on a miss.
    ///
    /// # Returns
    /// A reference to the bound value, or `None` if the name is unbound in
    /// every reachable scope.
    ///
    /// # Panics
    /// Panics if `env` was not produced by this arena, which cannot happen
    /// during normal evaluation.
    #[must_use]
    pub fn get(&self, env: EnvId, name: &str) -> Option<&Object> {
        let mut current = Some(env);

        while let Some(EnvId(index)) = current {
            let scope = &self.scopes[index];
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            current = scope.parent;
        }

        None
    }

    /// Binds a name in scope `env` itself, never in a parent.
    ///
    /// There is no separate re-assignment form: binding an existing name in
    /// the same scope overwrites it, and binding it in a child scope
    /// shadows the outer one.
    ///
    /// # Panics
    /// Panics if `env` was not produced by this arena, which cannot happen
    /// during normal evaluation.
    ///
    /// # Example
    /// ```
    /// use vervet::interpreter::value::{core::Object, environment::Environment};
    ///
    /// let mut envs = Environment::new();
    /// let global = envs.global();
    ///
    /// envs.set(global, "x", Object::Integer(1));
    /// envs.set(global, "x", Object::Integer(2));
    ///
    /// assert_eq!(envs.get(global, "x"), Some(&Object::Integer(2)));
    /// ```
    pub fn set(&mut self, env: EnvId, name: &str, value: Object) {
        let EnvId(index) = env;
        self.scopes[index].bindings.insert(name.to_string(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
