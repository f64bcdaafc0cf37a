//!
//! The subject registry: the harness's stand-in for "the current
//! environment". A type exists exactly when a descriptor for its name has
//! been registered here, and all construction and method dispatch flows
//! through the registry so that absent names surface as errors, never
//! panics.
//!
//! ## Dispatch Invariant
//!
//! `invoke` releases its borrow of the receiver before running the method
//! body. Bodies may re-enter the registry (nested `invoke` on the receiver
//! or on an argument), so holding a borrow across the call would abort the
//! run on perfectly conforming subjects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::SubjectError;
use crate::subject::descriptor::{MethodDef, SubjectResult, TypeDescriptor};
use crate::subject::instance::{Fields, Instance};
use crate::value::{SubjectHandle, Value};

// Concrete, seedable PRNG so spawn positions are reproducible in tests.
type SmallRng = Xoshiro256StarStar;

pub struct SubjectRegistry {
    types: HashMap<String, TypeDescriptor>,
    prng: RefCell<SmallRng>,
}

impl SubjectRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            prng: RefCell::new(SmallRng::from_entropy()),
        }
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            types: HashMap::new(),
            prng: RefCell::new(SmallRng::from_seed(seed)),
        }
    }

    /// Registers a descriptor under its type name. A later registration of
    /// the same name shadows the earlier one.
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name().to_string(), descriptor);
    }

    pub fn resolve(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Runs the named type's constructor body and returns the resulting
    /// field map. Subtype constructors call this for their parent's portion
    /// of the fields, the way a `super(...)` call would.
    pub fn base_fields(&self, type_name: &str, args: &[Value]) -> Result<Fields, SubjectError> {
        let descriptor = self
            .resolve(type_name)
            .ok_or_else(|| SubjectError::UnknownType {
                name: type_name.to_string(),
            })?;
        let padded = pad_args(args, descriptor.constructor().arity);
        (descriptor.constructor().body)(self, &padded)
    }

    /// Constructs a new instance of the named type.
    pub fn construct(&self, type_name: &str, args: &[Value]) -> Result<SubjectHandle, SubjectError> {
        let fields = self.base_fields(type_name, args)?;
        Ok(Rc::new(RefCell::new(Instance::new(type_name, fields))))
    }

    /// Invokes a method on an instance, dispatching from the instance's
    /// concrete type along the declared parent chain.
    pub fn invoke(&self, recv: &SubjectHandle, method: &str, args: &[Value]) -> SubjectResult {
        let type_name = recv.borrow().type_name().to_string();
        let def = self
            .find_method(&type_name, method)
            .ok_or_else(|| SubjectError::UnknownMethod {
                type_name: type_name.clone(),
                method: method.to_string(),
            })?
            .clone();
        let padded = pad_args(args, def.arity);
        (def.body)(self, recv, &padded)
    }

    /// Walks the declared parent chain looking for the first type that
    /// declares `method` on its own surface.
    fn find_method(&self, type_name: &str, method: &str) -> Option<&MethodDef> {
        let mut current = self.resolve(type_name);
        let mut hops = 0;
        while let Some(descriptor) = current {
            if let Some(def) = descriptor.own_method(method) {
                return Some(def);
            }
            // A chain longer than the registry can only mean a parent cycle.
            hops += 1;
            if hops > self.types.len() {
                return None;
            }
            current = descriptor.parent().and_then(|p| self.resolve(p));
        }
        None
    }

    /// A spawn coordinate in `0..=upper`, rounded to a whole number.
    pub fn spawn_coord(&self, upper: f64) -> f64 {
        (self.prng.borrow_mut().gen::<f64>() * upper).round()
    }
}

impl Default for SubjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Pads missing positional arguments with `Nil` and drops extras, so a
/// subject with the wrong declared arity still runs; the structural checks
/// report the arity defect separately.
fn pad_args(args: &[Value], arity: usize) -> Vec<Value> {
    let mut padded = args.to_vec();
    padded.truncate(arity);
    padded.resize(arity, Value::Nil);
    padded
}
