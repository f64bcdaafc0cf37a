// # Subject Model
//
// This module models the student-authored side of the exercise: types the
// harness does not control and must not trust.
//
// ## Module Structure
//
// - **`descriptor`**: static description of one subject type (parent name,
//   constructor and method arities, behaviour bodies)
// - **`instance`**: a live subject object (concrete type name + field map)
// - **`registry`**: string name → descriptor lookup, construction, and
//   method dispatch along the declared parent chain
//
// ## Registry Invariant
//
// The registry is the single source of truth for what is "defined" in the
// environment. Every structural question the conformance checks ask is
// answered from descriptors alone; behaviour is only exercised through
// `SubjectRegistry::construct` and `SubjectRegistry::invoke`, both of which
// return errors instead of panicking when a name does not resolve.

pub mod descriptor;
pub mod instance;
pub mod registry;

pub use descriptor::{ConstructorDef, MethodDef, SubjectResult, TypeDescriptor};
pub use instance::{Fields, Instance};
pub use registry::SubjectRegistry;
