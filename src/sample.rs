//! Reference implementations of the assignment's subject types.
//!
//! These descriptors are what a fully conforming submission looks like to
//! the harness. The demo runner registers them to produce an all-green
//! report, and the tests perturb them to exercise every failure path.

use crate::subject::{Fields, SubjectRegistry, TypeDescriptor};
use crate::value::Value;

/// Spawn area, matching the exercise's canvas.
pub const SPAWN_WIDTH: f64 = 600.0;
pub const SPAWN_HEIGHT: f64 = 500.0;

/// Registers the full reference roster: Animal, FurryAnimal, Bird, Cat, Dog.
pub fn register_reference_subjects(registry: &mut SubjectRegistry) {
    registry.register(animal());
    registry.register(furry_animal());
    registry.register(bird());
    registry.register(cat());
    registry.register(dog());
}

pub fn animal() -> TypeDescriptor {
    TypeDescriptor::new("Animal", 3, |reg, args| {
        let mut fields = Fields::new();
        fields.insert("name".to_string(), args[0].clone());
        fields.insert("healthLevel".to_string(), args[1].clone());
        fields.insert("age".to_string(), args[2].clone());
        fields.insert("posX".to_string(), Value::Number(reg.spawn_coord(SPAWN_WIDTH)));
        fields.insert("posY".to_string(), Value::Number(reg.spawn_coord(SPAWN_HEIGHT)));
        Ok(fields)
    })
    .method("getX", 0, |_, recv, _| Ok(recv.borrow().field("posX")))
    .method("getY", 0, |_, recv, _| Ok(recv.borrow().field("posY")))
    .method("getHealthLevel", 0, |_, recv, _| {
        Ok(recv.borrow().field("healthLevel"))
    })
    .method("decreaseHealth", 0, |_, recv, _| {
        // Health never falls below 0.
        let current = recv.borrow().field("healthLevel").as_number().unwrap_or(0.0);
        recv.borrow_mut()
            .set_field("healthLevel", Value::Number((current - 1.0).max(0.0)));
        Ok(Value::Nil)
    })
    .method("getAge", 0, |_, recv, _| Ok(recv.borrow().field("age")))
    .method("call", 0, |_, recv, _| {
        let name = recv.borrow().field("name");
        Ok(Value::Str(format!("Hello, my name is {name}")))
    })
    .method("moveX", 1, |_, recv, args| {
        recv.borrow_mut().set_field("posX", args[0].clone());
        Ok(Value::Nil)
    })
    .method("moveY", 1, |_, recv, args| {
        recv.borrow_mut().set_field("posY", args[0].clone());
        Ok(Value::Nil)
    })
}

pub fn furry_animal() -> TypeDescriptor {
    TypeDescriptor::new("FurryAnimal", 4, |reg, args| {
        let mut fields = reg.base_fields("Animal", &args[..3])?;
        fields.insert("furColour".to_string(), args[3].clone());
        Ok(fields)
    })
    .extends("Animal")
    .method("getFurColour", 0, |_, recv, _| {
        Ok(recv.borrow().field("furColour"))
    })
}

pub fn bird() -> TypeDescriptor {
    TypeDescriptor::new("Bird", 4, |reg, args| {
        let mut fields = reg.base_fields("Animal", &args[..3])?;
        fields.insert("beakType".to_string(), args[3].clone());
        Ok(fields)
    })
    .extends("Animal")
    .method("getBeakType", 0, |_, recv, _| {
        Ok(recv.borrow().field("beakType"))
    })
    .method("decreaseHealth", 0, |_, recv, _| {
        // Birds are fragile: a hit costs 5 health instead of 1.
        let current = recv.borrow().field("healthLevel").as_number().unwrap_or(0.0);
        recv.borrow_mut()
            .set_field("healthLevel", Value::Number((current - 5.0).max(0.0)));
        Ok(Value::Nil)
    })
}

pub fn cat() -> TypeDescriptor {
    TypeDescriptor::new("Cat", 4, |reg, args| reg.base_fields("FurryAnimal", args))
        .extends("FurryAnimal")
        .method("call", 0, |_, _, _| Ok(Value::Str("meow".to_string())))
        .method("jumpAt", 1, |reg, recv, args| {
            let Some(target) = args[0].as_object().cloned() else {
                return Err(crate::error::SubjectError::TypeMismatch {
                    context: "the target argument of `Cat.jumpAt()`".to_string(),
                    expected: "an animal object",
                    found: args[0].type_name().to_string(),
                });
            };
            let x = reg.invoke(&target, "getX", &[])?;
            let y = reg.invoke(&target, "getY", &[])?;
            reg.invoke(recv, "moveX", &[x])?;
            reg.invoke(recv, "moveY", &[y])?;
            reg.invoke(&target, "decreaseHealth", &[])?;
            Ok(Value::Nil)
        })
}

pub fn dog() -> TypeDescriptor {
    TypeDescriptor::new("Dog", 4, |reg, args| reg.base_fields("FurryAnimal", args))
        .extends("FurryAnimal")
        .method("barkAt", 1, |_, recv, _| {
            let name = recv.borrow().field("name");
            Ok(Value::Str(format!("{name} says: Woof!")))
        })
}
