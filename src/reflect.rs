//! Reflective conformance checks.
//!
//! Pure structural queries over the subject registry. Every function here is
//! total: an unresolved type name or an absent member answers `false` (or
//! `None` for the arity accessors), never a panic. The checks ask about the
//! *declared* shape of a type (its direct parent and its own method surface),
//! which is what distinguishes an override from an inherited method.

use crate::subject::SubjectRegistry;

/// True iff a type with this name is registered in the environment.
pub fn type_exists(registry: &SubjectRegistry, name: &str) -> bool {
    registry.resolve(name).is_some()
}

/// True iff `child`'s declared direct parent is exactly `parent` and both
/// names resolve. Transitive ancestry does not count: the exercise uses a
/// single-level hierarchy, and a grandparent match would mask a wrong
/// `extends` clause.
pub fn type_extends(registry: &SubjectRegistry, child: &str, parent: &str) -> bool {
    let Some(child_descriptor) = registry.resolve(child) else {
        return false;
    };
    child_descriptor.parent() == Some(parent) && registry.contains(parent)
}

/// True iff the type declares `method` on its own surface. Inherited methods
/// do not count, which is what makes this usable as an override probe.
pub fn method_exists(registry: &SubjectRegistry, type_name: &str, method: &str) -> bool {
    registry
        .resolve(type_name)
        .and_then(|d| d.own_method(method))
        .is_some()
}

/// True iff the type's own `method` declares exactly `expected` positional
/// parameters.
pub fn method_has_arity(
    registry: &SubjectRegistry,
    type_name: &str,
    method: &str,
    expected: usize,
) -> bool {
    method_arity(registry, type_name, method) == Some(expected)
}

/// True iff the type's constructor declares exactly `expected` positional
/// parameters.
pub fn constructor_has_arity(registry: &SubjectRegistry, type_name: &str, expected: usize) -> bool {
    constructor_arity(registry, type_name) == Some(expected)
}

/// The declared arity of the type's own `method`, when both resolve.
pub fn method_arity(registry: &SubjectRegistry, type_name: &str, method: &str) -> Option<usize> {
    registry
        .resolve(type_name)
        .and_then(|d| d.own_method(method))
        .map(|m| m.arity)
}

/// The declared arity of the type's constructor, when the type resolves.
pub fn constructor_arity(registry: &SubjectRegistry, type_name: &str) -> Option<usize> {
    registry.resolve(type_name).map(|d| d.constructor().arity)
}
