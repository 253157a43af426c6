use pretty_assertions::assert_eq;
use xscript::{Environment, Value, run};

#[test]
fn define_refuses_a_second_binding_in_the_same_frame() {
    let mut env = Environment::new();
    assert!(env.define("x", Value::Integer(1)));
    assert!(!env.define("x", Value::Integer(2)));
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn inner_frames_shadow_and_assign_through_the_chain() {
    let mut env = Environment::new();
    env.define("x", Value::Integer(1));
    env.define("y", Value::Integer(10));

    env.enter_scope();
    assert!(env.define("x", Value::Integer(2)));
    assert!(env.assign("y", Value::Integer(20)));
    assert!(!env.assign("z", Value::Integer(0)));
    assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    env.exit_scope();

    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
    assert_eq!(env.get("y"), Some(&Value::Integer(20)));
    assert_eq!(env.get("z"), None);
}

#[test]
fn contains_looks_locally_or_through_the_chain() {
    let mut env = Environment::new();
    env.define("outer", Value::Bool(true));
    env.enter_scope();
    env.define("inner", Value::Bool(false));

    assert!(env.contains("inner", true));
    assert!(env.contains("inner", false));
    assert!(!env.contains("outer", true));
    assert!(env.contains("outer", false));
    assert!(!env.contains("missing", false));
}

#[test]
fn undefine_removes_only_local_bindings() {
    let mut env = Environment::new();
    env.define("outer", Value::Integer(1));
    env.enter_scope();
    env.define("inner", Value::Integer(2));

    assert_eq!(env.undefine("inner"), Some(Value::Integer(2)));
    assert_eq!(env.undefine("inner"), None);
    assert_eq!(env.undefine("outer"), None);
    assert_eq!(env.get("outer"), Some(&Value::Integer(1)));
}

#[test]
fn clear_drops_frames_and_root_bindings() {
    let mut env = Environment::with_natives();
    env.define("x", Value::Integer(1));
    env.enter_scope();
    env.enter_scope();
    env.define("y", Value::Integer(2));
    assert_eq!(env.depth(), 3);

    env.clear();
    assert_eq!(env.depth(), 1);
    assert!(!env.contains("x", false));
    assert!(!env.contains("y", false));
    assert!(!env.contains("print", false));

    assert!(env.define("x", Value::Integer(3)));
    assert_eq!(run("x + 1;", &mut env).unwrap(), Value::Integer(4));
}

#[test]
fn the_root_frame_is_never_released() {
    let mut env = Environment::new();
    env.define("x", Value::Integer(1));
    env.exit_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}
