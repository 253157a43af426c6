use std::collections::HashMap;

use tracing::{debug, warn};

use crate::interpreter::{evaluator::function::core::install_natives, value::core::Value};

/// A single frame of bindings.
#[derive(Debug, Clone, Default)]
struct Scope {
    /// Names bound in this frame.
    bindings: HashMap<String, Value>,
    /// Index of the enclosing frame (`None` for the root).
    parent:   Option<usize>,
}

/// Maps names to values through a chain of frames.
///
/// Frames live in an arena and refer to their parent by index. The root frame
/// is created with the environment and never released; every other frame is
/// entered for a block or a call and exited when it ends. Lookups and
/// assignments search the current frame and then its ancestors; declarations
/// only ever touch the current frame.
///
/// # Example
/// ```
/// use xscript::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// assert!(env.define("x", Value::Integer(1)));
///
/// env.enter_scope();
/// assert!(env.define("x", Value::Integer(2)));
/// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
/// env.exit_scope();
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    scopes:  Vec<Scope>,
    current: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates a root environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope::default()],
               current: 0, }
    }

    /// Creates a root environment with the native functions (`print`,
    /// `assert`) already bound.
    #[must_use]
    pub fn with_natives() -> Self {
        let mut env = Self::new();
        install_natives(&mut env);
        env
    }

    /// Enters a new frame whose parent is the current frame.
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 parent:   Some(self.current), });
        self.current = self.scopes.len() - 1;
        debug!(depth = self.scopes.len(), "entered scope");
    }

    /// Releases the current frame and returns to its parent.
    ///
    /// The root frame is never released.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() <= 1 {
            warn!("attempted to exit the root scope");
            return;
        }
        if let Some(scope) = self.scopes.pop() {
            self.current = scope.parent.unwrap_or(0);
        }
        debug!(depth = self.scopes.len(), "exited scope");
    }

    /// The number of live frames, including the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds `name` in the current frame.
    ///
    /// # Returns
    /// `false`, without changing anything, if `name` is already bound in the
    /// current frame. Bindings in enclosing frames are shadowed, not touched.
    pub fn define(&mut self, name: &str, value: Value) -> bool {
        let bindings = &mut self.scopes[self.current].bindings;
        if bindings.contains_key(name) {
            return false;
        }
        bindings.insert(name.to_string(), value);
        true
    }

    /// Rebinds the nearest existing binding of `name`.
    ///
    /// # Returns
    /// `false` if `name` is not bound in the current frame or any ancestor.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.find(name) {
            Some(index) => {
                self.scopes[index].bindings.insert(name.to_string(), value);
                true
            },
            None => false,
        }
    }

    /// Looks up the nearest binding of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find(name).and_then(|index| self.scopes[index].bindings.get(name))
    }

    /// Returns `true` if `name` is bound in the current frame, or anywhere in
    /// the chain unless `local_only` is set.
    #[must_use]
    pub fn contains(&self, name: &str, local_only: bool) -> bool {
        if local_only {
            self.scopes[self.current].bindings.contains_key(name)
        } else {
            self.find(name).is_some()
        }
    }

    /// Removes a binding from the current frame.
    ///
    /// # Returns
    /// The removed value, or `None` if `name` was not bound in the current
    /// frame.
    pub fn undefine(&mut self, name: &str) -> Option<Value> {
        self.scopes[self.current].bindings.remove(name)
    }

    /// Drops every frame but the root and every binding in the root.
    pub fn clear(&mut self) {
        self.scopes.truncate(1);
        self.scopes[0].bindings.clear();
        self.current = 0;
    }

    fn find(&self, name: &str) -> Option<usize> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            let scope = &self.scopes[i];
            if scope.bindings.contains_key(name) {
                return Some(i);
            }
            index = scope.parent;
        }
        None
    }
}
