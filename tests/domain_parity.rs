//! Parity checks between the operation registry and the behavior of every domain.
//!
//! The registry says which operations hand back the receiver and which hand back the callback's result; each domain
//! module must agree with it.

use scopefn::boolean::{self, NoPredicate};
use scopefn::{number, scope, text};
use scopefn_core::lang::domains::{self, DomainId};
use scopefn_core::lang::operations::{self, OperationId, Returns};

const SENTINEL: &str = "callback result";

/// Run `op` in the text domain on `"receiver"` and report what came back.
fn text_outcome(op: OperationId) -> Option<String> {
    let receiver = "receiver";
    match op {
        OperationId::Let => Some(text::let_(receiver, |_| SENTINEL).to_owned()),
        OperationId::Run => Some(text::run(receiver, |_| SENTINEL).to_owned()),
        OperationId::Also => Some(text::also(receiver, |_| {}).to_owned()),
        OperationId::Apply => Some(text::apply(receiver, |_| {}).to_owned()),
        OperationId::TakeIf => text::take_if(receiver, |_| false).map(str::to_owned),
        OperationId::TakeUnless => text::take_unless(receiver, |_| true).map(str::to_owned),
    }
}

/// Run `op` in the object domain on `"receiver"` and report what came back.
fn object_outcome(op: OperationId) -> Option<String> {
    let receiver = String::from("receiver");
    match op {
        OperationId::Let => Some(scope::let_(receiver, |_| SENTINEL.to_owned())),
        OperationId::Run => Some(scope::run(&receiver, |_| SENTINEL.to_owned())),
        OperationId::Also => Some(scope::also(receiver, |_| {})),
        OperationId::Apply => Some(scope::apply(&receiver, |_| {}).clone()),
        OperationId::TakeIf => scope::take_if(receiver, |_| false),
        OperationId::TakeUnless => scope::take_unless(receiver, |_| true),
    }
}

#[test]
fn registry_return_shape_matches_text_and_object_domains() {
    for info in operations::OPERATIONS {
        for (domain, outcome) in [
            (DomainId::Text, text_outcome(info.id)),
            (DomainId::Object, object_outcome(info.id)),
        ] {
            let expected = match info.returns {
                Returns::CallbackResult => Some(SENTINEL.to_owned()),
                Returns::Receiver => Some(String::from("receiver")),
                // Predicates above are chosen to fail the gate.
                Returns::ReceiverOrAbsent => None,
            };
            assert_eq!(outcome, expected, "{} in the {} domain", info.id, domain);
        }
    }
}

#[test]
fn number_and_boolean_receiver_operations_return_primitive() {
    let boxed = Box::new(12_i64);
    assert_eq!(number::also(&boxed, |_| {}), 12);
    assert_eq!(number::apply(&boxed, |_| {}), 12);
    assert_eq!(number::let_(&boxed, |n| n.to_string()), "12");

    let flag = Box::new(true);
    assert!(boolean::also(&flag, |_| {}));
    assert!(boolean::apply(&flag, |_| {}));
    assert_eq!(boolean::run(&flag, |b| if b { "yes" } else { "no" }), "yes");
}

#[test]
fn optional_predicate_only_in_boolean_domain() {
    let info = domains::info_for(DomainId::Boolean);
    assert!(info.optional_predicate);
    // The boolean domain is the only one whose gate can be called without a predicate.
    assert_eq!(boolean::take_if(true, None::<NoPredicate>), Some(true));
    for other in [DomainId::Object, DomainId::Number, DomainId::Text] {
        assert!(!domains::info_for(other).optional_predicate, "{other} should require a predicate");
    }
}
