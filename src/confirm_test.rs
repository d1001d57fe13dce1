use std::cell::RefCell;

use super::*;

#[test]
fn confirm_action_returns_user_choice() {
    assert!(confirm_action(&|_: &str| true, "Delete student?"));
    assert!(!confirm_action(&|_: &str| false, "Delete student?"));
}

#[test]
fn confirm_action_forwards_message() {
    let seen = RefCell::new(Vec::new());
    let confirmer = |msg: &str| {
        seen.borrow_mut().push(msg.to_owned());
        true
    };
    assert!(confirm_action(&confirmer, "Delete all students?"));
    assert_eq!(seen.into_inner(), vec!["Delete all students?".to_owned()]);
}
