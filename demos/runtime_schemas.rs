//! Runtime Schemas
//!
//! This example validates dynamic JSON values against record schemas.
//!
//! Key concepts:
//! - Validation that reports every violation at once
//! - Partial / Required / Readonly as schema transforms
//! - Patches that respect read-only fields
//! - Discriminated unions with a closed variant set
//!
//! Run with: cargo run --example runtime_schemas

use serde_json::json;
use shapekit::schema::{BuildError, FieldKind, SchemaBuilder, UnionSchemaBuilder};
use stillwater::validation::Validation;

fn report(label: &str, result: shapekit::ShapeValidation<()>) {
    match result {
        Validation::Success(_) => println!("  {label}: ok"),
        Validation::Failure(errors) => {
            println!("  {label}: {} violation(s)", errors.len());
            for error in errors.iter() {
                println!("    - {error}");
            }
        }
    }
}

fn main() -> Result<(), BuildError> {
    println!("=== Runtime Schemas Example ===\n");

    // Example 1: accumulate all violations
    println!("Example 1: Validation");
    let person = SchemaBuilder::new()
        .readonly("name", FieldKind::String)
        .field("surname", FieldKind::String)
        .optional("date_of_birth", FieldKind::String)
        .build()?;

    report("complete person", person.validate(&json!({"name": "mario", "surname": "rossi"})));
    report("broken person", person.validate(&json!({"surname": 7, "age": 40})));
    println!();

    // Example 2: derived schemas
    println!("Example 2: Partial and Required");
    report("partial accepts subset", person.partial().validate(&json!({"surname": "rossi"})));
    report(
        "required demands optional fields",
        person.required().validate(&json!({"name": "mario", "surname": "rossi"})),
    );
    println!();

    // Example 3: patches
    println!("Example 3: Patches");
    let mut record = json!({"name": "mario", "surname": "rossi"});
    report("rename surname", person.apply_patch(&mut record, &json!({"surname": "bianchi"})));
    report("rename name", person.apply_patch(&mut record, &json!({"name": "luigi"})));
    println!("  record is now {record}\n");

    // Example 4: tagged unions
    println!("Example 4: Discriminated Unions");
    let radius = SchemaBuilder::new()
        .field("radius", FieldKind::Number)
        .build()?;
    let square = SchemaBuilder::new().field("size", FieldKind::Number).build()?;
    let shape = UnionSchemaBuilder::new("kind")
        .variant("circle", radius.clone())
        .variant("sphere", radius)
        .variant("square", square)
        .build()?;

    for value in [
        json!({"kind": "circle", "radius": 1.5}),
        json!({"kind": "square", "radius": 2}),
        json!({"kind": "cube", "size": 2}),
    ] {
        report(&value.to_string(), shape.validate(&value));
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
