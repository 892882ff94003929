//! Snapshot tests for generated constructors.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use ctorgen_codegen::{Generator, TypeDef};
use ctorgen_core::{Visibility, constructor, hash, kwargs};

fn render(def: TypeDef) -> String {
    Generator::new([def]).render()
}

#[test]
fn test_default_constructor_private_readers() {
    let code = render(
        TypeDef::new(
            "Controller",
            constructor(["request", "response"], Visibility::Private),
        )
        .doc("An HTTP controller."),
    );
    insta::assert_snapshot!("default_private", code);
}

#[test]
fn test_hash_constructor_protected_readers() {
    let code = render(TypeDef::new(
        "Request",
        hash(["method", "path"], Visibility::Protected),
    ));
    insta::assert_snapshot!("hash_protected", code);
}

#[test]
fn test_kwargs_constructor_public_readers() {
    let code = render(
        TypeDef::new("Options", kwargs(["verbose", "color"], Visibility::Public))
            .value_type("String"),
    );
    insta::assert_snapshot!("kwargs_public", code);
}
