//! The assignment's expected base contract: the method names and arities
//! `Animal` and `FurryAnimal` are specified to carry. The Bird/Cat/Dog
//! checks encode their expectations inline because each has bespoke
//! behaviour to verify; the base types are pure structure, so they are
//! data here.

use once_cell::sync::Lazy;

pub struct MethodSpec {
    pub name: &'static str,
    pub arity: usize,
}

pub struct TypeSpec {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub constructor_arity: usize,
    pub methods: &'static [MethodSpec],
}

const ANIMAL_METHODS: &[MethodSpec] = &[
    MethodSpec { name: "getX", arity: 0 },
    MethodSpec { name: "getY", arity: 0 },
    MethodSpec { name: "getHealthLevel", arity: 0 },
    MethodSpec { name: "decreaseHealth", arity: 0 },
    MethodSpec { name: "getAge", arity: 0 },
    MethodSpec { name: "call", arity: 0 },
    MethodSpec { name: "moveX", arity: 1 },
    MethodSpec { name: "moveY", arity: 1 },
];

const FURRY_ANIMAL_METHODS: &[MethodSpec] = &[MethodSpec {
    name: "getFurColour",
    arity: 0,
}];

/// Base-contract types in check order.
pub static BASE_CONTRACT: Lazy<Vec<TypeSpec>> = Lazy::new(|| {
    vec![
        TypeSpec {
            name: "Animal",
            parent: None,
            constructor_arity: 3,
            methods: ANIMAL_METHODS,
        },
        TypeSpec {
            name: "FurryAnimal",
            parent: Some("Animal"),
            constructor_arity: 4,
            methods: FURRY_ANIMAL_METHODS,
        },
    ]
});
