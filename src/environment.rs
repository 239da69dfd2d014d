use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a binding frame. Closures keep their defining frame
/// alive through this handle; frames that end up referring to themselves
/// (a recursive function stored in the frame it captures) are leaked for
/// process lifetime.
pub type Env = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(obj) => Some(obj.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    pub fn set(&mut self, name: &str, val: Object) {
        self.store.insert(name.to_owned(), val);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let env = Environment::new();
        env.borrow_mut().set("a", Object::Integer(1));

        assert_eq!(env.borrow().get("a"), Some(Object::Integer(1)));
        assert_eq!(env.borrow().get("b"), None);
    }

    #[test]
    fn test_lookup_walks_the_chain() {
        let outer = Environment::new();
        outer.borrow_mut().set("a", Object::Integer(1));
        outer.borrow_mut().set("b", Object::Integer(2));

        let inner = Environment::new_enclosed(&outer);
        inner.borrow_mut().set("b", Object::Integer(20));

        assert_eq!(inner.borrow().get("a"), Some(Object::Integer(1)));
        assert_eq!(inner.borrow().get("b"), Some(Object::Integer(20)));
        assert_eq!(outer.borrow().get("b"), Some(Object::Integer(2)));
    }

    #[test]
    fn test_binding_mutates_the_innermost_frame() {
        let outer = Environment::new();
        outer.borrow_mut().set("a", Object::Integer(1));

        let inner = Environment::new_enclosed(&outer);
        inner.borrow_mut().set("a", Object::Integer(10));

        assert_eq!(outer.borrow().get("a"), Some(Object::Integer(1)));
        assert_eq!(inner.borrow().get("a"), Some(Object::Integer(10)));
    }

    #[test]
    fn test_frames_are_shared_between_handles() {
        let env = Environment::new();
        let alias = Rc::clone(&env);

        alias.borrow_mut().set("a", Object::Integer(5));

        assert_eq!(env.borrow().get("a"), Some(Object::Integer(5)));
    }
}
