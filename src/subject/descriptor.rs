use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::SubjectError;
use crate::subject::instance::Fields;
use crate::subject::registry::SubjectRegistry;
use crate::value::{SubjectHandle, Value};

/// Result type for all subject-boundary calls.
pub type SubjectResult = Result<Value, SubjectError>;

/// Body of a registered method. Receives the registry for nested dispatch
/// (a method may call methods on its receiver or on an argument), the
/// receiver handle, and positional arguments already padded to the declared
/// arity.
pub type MethodFn = Rc<dyn Fn(&SubjectRegistry, &SubjectHandle, &[Value]) -> SubjectResult>;

/// Body of a registered constructor: produces the initial field map for a
/// new instance. A subtype constructor typically delegates to
/// `SubjectRegistry::base_fields` for its parent's portion.
pub type ConstructorFn = Rc<dyn Fn(&SubjectRegistry, &[Value]) -> Result<Fields, SubjectError>>;

#[derive(Clone)]
pub struct MethodDef {
    pub arity: usize,
    pub body: MethodFn,
}

#[derive(Clone)]
pub struct ConstructorDef {
    pub arity: usize,
    pub body: ConstructorFn,
}

/// Static description of one subject type: its name, its declared direct
/// parent, its constructor, and the methods declared on its own surface.
///
/// The own-method table deliberately excludes inherited methods; override
/// checks depend on the distinction. Registration of a descriptor is the
/// defined point at which a type becomes "defined" for the harness.
#[derive(Clone)]
pub struct TypeDescriptor {
    name: String,
    parent: Option<String>,
    constructor: ConstructorDef,
    methods: HashMap<String, MethodDef>,
}

impl TypeDescriptor {
    /// Starts a descriptor with its constructor. Parent and methods are
    /// added with [`TypeDescriptor::extends`] and [`TypeDescriptor::method`].
    pub fn new(
        name: impl Into<String>,
        constructor_arity: usize,
        constructor: impl Fn(&SubjectRegistry, &[Value]) -> Result<Fields, SubjectError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parent: None,
            constructor: ConstructorDef {
                arity: constructor_arity,
                body: Rc::new(constructor),
            },
            methods: HashMap::new(),
        }
    }

    /// Declares the direct parent type by name. The name is not resolved
    /// here; an unregistered parent simply ends the dispatch chain.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declares a method on this type's own surface.
    pub fn method(
        mut self,
        name: impl Into<String>,
        arity: usize,
        body: impl Fn(&SubjectRegistry, &SubjectHandle, &[Value]) -> SubjectResult + 'static,
    ) -> Self {
        self.methods.insert(
            name.into(),
            MethodDef {
                arity,
                body: Rc::new(body),
            },
        );
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn constructor(&self) -> &ConstructorDef {
        &self.constructor
    }

    /// Looks up a method declared directly on this type.
    pub fn own_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.get(name)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("constructor_arity", &self.constructor.arity)
            .field("methods", &methods)
            .finish()
    }
}
