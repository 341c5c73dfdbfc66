//! Queue and State
//!
//! This example feeds partial updates through a FIFO queue into a state
//! container.
//!
//! Key concepts:
//! - Strict FIFO ordering with an empty-queue `None`
//! - Partial updates that leave absent fields untouched
//! - Turning a partial back into a full record with `complete()`
//! - Read-only snapshots
//!
//! Run with: cargo run --example queue_and_state

use shapekit::core::{Queue, State};
use shapekit::record;
use shapekit::shape::Patch;
use stillwater::validation::Validation;

record! {
    /// A point on the plane.
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }
    patch: PointPatch
}

fn main() {
    println!("=== Queue and State Example ===\n");

    // Example 1: FIFO ordering
    println!("Example 1: FIFO Queue");
    let mut numbers = Queue::new();
    for n in [1, 2, 3] {
        numbers.enqueue(n);
    }
    while let Some(n) = numbers.dequeue() {
        println!("  dequeued {n}");
    }
    println!("  empty queue yields {:?}\n", numbers.dequeue());

    // Example 2: queued partial updates
    println!("Example 2: Partial Updates");
    let mut updates = Queue::new();
    updates.enqueue(PointPatch {
        y: Some(3),
        ..Default::default()
    });
    updates.enqueue(PointPatch::default());
    updates.enqueue(PointPatch {
        x: Some(-2),
        ..Default::default()
    });

    let mut state = State::new(Point { x: 0, y: 0 });
    let before = state.snapshot();
    while let Some(patch) = updates.dequeue() {
        let fields = patch.fields();
        let current = state.update(patch);
        println!("  applied {fields:?} -> {current:?}");
    }
    println!("  revision: {}", state.revision());
    println!("  snapshot taken before updates: {:?}\n", *before);

    // Example 3: Required from Partial
    println!("Example 3: Completing a Partial");
    let partial = PointPatch {
        x: Some(1),
        ..Default::default()
    };
    match partial.complete() {
        Validation::Success(point) => println!("  complete: {point:?}"),
        Validation::Failure(errors) => {
            for error in errors.iter() {
                println!("  {error}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
