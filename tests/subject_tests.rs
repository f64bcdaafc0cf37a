//! Behavioural tests for the reference subjects through the registry:
//! construction, field access, inherited dispatch, and overrides.

use menagerie::sample;
use menagerie::subject::SubjectRegistry;
use menagerie::value::{Colour, Value};

fn reference_registry() -> SubjectRegistry {
    let mut registry = SubjectRegistry::from_seed([2; 32]);
    sample::register_reference_subjects(&mut registry);
    registry
}

#[test]
fn bird_returns_the_fourth_constructor_argument_as_beak_type() {
    let registry = reference_registry();
    let bird = registry
        .construct(
            "Bird",
            &[
                Value::Str("Bill".to_string()),
                Value::Number(100.0),
                Value::Number(10.0),
                Value::Str("pointy".to_string()),
            ],
        )
        .unwrap();
    assert_eq!(
        registry.invoke(&bird, "getBeakType", &[]).unwrap(),
        Value::Str("pointy".to_string())
    );
}

#[test]
fn animal_call_greets_with_its_name() {
    let registry = reference_registry();
    let animal = registry
        .construct(
            "Animal",
            &[
                Value::Str("Brian".to_string()),
                Value::Number(95.0),
                Value::Number(10.0),
            ],
        )
        .unwrap();
    assert_eq!(
        registry.invoke(&animal, "call", &[]).unwrap(),
        Value::Str("Hello, my name is Brian".to_string())
    );
}

#[test]
fn health_never_falls_below_zero() {
    let registry = reference_registry();
    let animal = registry
        .construct(
            "Animal",
            &[
                Value::Str("Pete".to_string()),
                Value::Number(0.0),
                Value::Number(3.0),
            ],
        )
        .unwrap();
    registry.invoke(&animal, "decreaseHealth", &[]).unwrap();
    assert_eq!(
        registry.invoke(&animal, "getHealthLevel", &[]).unwrap(),
        Value::Number(0.0)
    );
}

#[test]
fn bird_override_costs_five_health() {
    let registry = reference_registry();
    let bird = registry
        .construct(
            "Bird",
            &[
                Value::Str("Bill".to_string()),
                Value::Number(100.0),
                Value::Number(10.0),
                Value::Str("pointy".to_string()),
            ],
        )
        .unwrap();
    registry.invoke(&bird, "decreaseHealth", &[]).unwrap();
    assert_eq!(
        registry.invoke(&bird, "getHealthLevel", &[]).unwrap(),
        Value::Number(95.0)
    );
}

#[test]
fn fur_colour_is_stored_and_returned_opaquely() {
    let registry = reference_registry();
    let colour = Colour::rgb(255, 0, 0);
    let pete = registry
        .construct(
            "FurryAnimal",
            &[
                Value::Str("Peter".to_string()),
                Value::Number(50.0),
                Value::Number(3.0),
                Value::Colour(colour),
            ],
        )
        .unwrap();
    assert_eq!(
        registry.invoke(&pete, "getFurColour", &[]).unwrap(),
        Value::Colour(colour)
    );
}

#[test]
fn inherited_accessors_dispatch_through_the_parent_chain() {
    let registry = reference_registry();
    let cat = registry
        .construct(
            "Cat",
            &[
                Value::Str("Ginger".to_string()),
                Value::Number(100.0),
                Value::Number(4.0),
                Value::Colour(Colour::rgb(255, 165, 0)),
            ],
        )
        .unwrap();
    // getAge is declared two levels up, on Animal.
    assert_eq!(
        registry.invoke(&cat, "getAge", &[]).unwrap(),
        Value::Number(4.0)
    );
}

#[test]
fn move_methods_update_the_position() {
    let registry = reference_registry();
    let animal = registry
        .construct(
            "Animal",
            &[
                Value::Str("Brian".to_string()),
                Value::Number(95.0),
                Value::Number(10.0),
            ],
        )
        .unwrap();
    registry
        .invoke(&animal, "moveX", &[Value::Number(42.0)])
        .unwrap();
    registry
        .invoke(&animal, "moveY", &[Value::Number(17.0)])
        .unwrap();
    assert_eq!(
        registry.invoke(&animal, "getX", &[]).unwrap(),
        Value::Number(42.0)
    );
    assert_eq!(
        registry.invoke(&animal, "getY", &[]).unwrap(),
        Value::Number(17.0)
    );
}

#[test]
fn cat_jump_relocates_the_cat_and_wounds_the_target() {
    let registry = reference_registry();
    let cat = registry
        .construct(
            "Cat",
            &[
                Value::Str("Ginger".to_string()),
                Value::Number(100.0),
                Value::Number(4.0),
                Value::Colour(Colour::rgb(255, 165, 0)),
            ],
        )
        .unwrap();
    let bird = registry
        .construct(
            "Bird",
            &[
                Value::Str("bill".to_string()),
                Value::Number(100.0),
                Value::Number(10.0),
                Value::Str("pointy".to_string()),
            ],
        )
        .unwrap();
    let bird_x = registry.invoke(&bird, "getX", &[]).unwrap();
    let bird_y = registry.invoke(&bird, "getY", &[]).unwrap();

    registry
        .invoke(&cat, "jumpAt", &[Value::Object(bird.clone())])
        .unwrap();

    assert_eq!(registry.invoke(&cat, "getX", &[]).unwrap(), bird_x);
    assert_eq!(registry.invoke(&cat, "getY", &[]).unwrap(), bird_y);
    assert_eq!(
        registry.invoke(&bird, "getHealthLevel", &[]).unwrap(),
        Value::Number(95.0)
    );
}

#[test]
fn spawn_positions_are_deterministic_under_a_seed() {
    let args = [
        Value::Str("Brian".to_string()),
        Value::Number(95.0),
        Value::Number(10.0),
    ];

    let mut first = SubjectRegistry::from_seed([9; 32]);
    sample::register_reference_subjects(&mut first);
    let mut second = SubjectRegistry::from_seed([9; 32]);
    sample::register_reference_subjects(&mut second);

    let a = first.construct("Animal", &args).unwrap();
    let b = second.construct("Animal", &args).unwrap();
    assert_eq!(
        first.invoke(&a, "getX", &[]).unwrap(),
        second.invoke(&b, "getX", &[]).unwrap()
    );
    assert_eq!(
        first.invoke(&a, "getY", &[]).unwrap(),
        second.invoke(&b, "getY", &[]).unwrap()
    );
}

#[test]
fn unset_fields_read_as_nil() {
    let registry = reference_registry();
    let animal = registry
        .construct(
            "Animal",
            &[
                Value::Str("Brian".to_string()),
                Value::Number(95.0),
                Value::Number(10.0),
            ],
        )
        .unwrap();
    assert!(!animal.borrow().has_field("furColour"));
    assert_eq!(animal.borrow().field("furColour"), Value::Nil);
}
