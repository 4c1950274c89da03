// demos/vector_demo.rs
//! Walk through the library's geometric operations with fixed inputs.
//!
//! Run with `cargo run --example vector_demo`.

use vector_engine::prelude::*;

fn main() -> Result<()> {
    // Projection of v onto w in the plane
    let v = Vector::parse(&["3.039", "1.879"])?;
    let w = Vector::parse(&["0.825", "2.036"])?;
    println!("parallel component:   {}", Rounded::new(&v.component_parallel_to(&w)?, 4));

    // Decomposition in four dimensions
    let v = Vector::parse(&["3.009", "-6.172", "3.692", "-2.51"])?;
    let w = Vector::parse(&["6.404", "-9.144", "2.759", "8.718"])?;
    println!("parallel component:   {}", Rounded::new(&v.component_parallel_to(&w)?, 4));
    println!("orthogonal component: {}", Rounded::new(&v.component_orthogonal_to(&w)?, 4));

    // Cross product and the area it spans
    let v = Vector::parse(&["8.462", "7.893", "-8.187"])?;
    let w = Vector::parse(&["6.984", "-5.975", "4.778"])?;
    println!("cross product:        {}", Rounded::new(&v.cross(&w)?, 4));

    let v = Vector::parse(&["1.5", "9.547", "3.691"])?;
    let w = Vector::parse(&["-6.007", "0.124", "5.772"])?;
    println!("parallelogram area:   {:.4}", v.area_of_parallelogram_with(&w)?);

    Ok(())
}
