//! # Example: Basic Operations
//!
//! Walk a 3 x 4 integer matrix through clearing, overwriting, elementwise
//! products and a double transpose, printing it after every step.
//!
//! Values are given column by column, so the literal below is the matrix
//!
//! 11 12 13 14
//! 21 22 23 24
//! 31 32 33 34
//!
//! Run with `RUST_LOG=trace` to see every operation being materialized.

use geometry::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let literal = vec![11, 21, 31, 12, 22, 32, 13, 23, 33, 14, 24, 34];
    let mut x = Matrix::from_values(3, 4, literal.clone())?;
    let y = Matrix::from_values(3, 4, literal.clone())?;
    let other: Vec<i32> = (51..63).collect();

    print!("{x}");
    println!("Is zero? {}\n", x.is_zero());

    println!("Clearing...");
    x.clear();
    print!("{x}");
    println!("Is zero? {}\n", x.is_zero());

    x.set_values(&other)?;
    print!("{x}");
    println!("Is zero? {}\n", x.is_zero());

    x = &x * &y;
    print!("{x}");

    let a = x.clone();
    x = &x * &x;
    print!("{a}");
    print!("{x}");

    x += 5;
    print!("{x}");

    x.set_values(&literal)?;
    x = transpose(&x);
    print!("{x}");
    x = transpose(&x);
    print!("{x}");

    // A 2 x 2 matrix cannot be combined with a 3 x 4 one.
    let z = Matrix::from_values(2, 2, vec![1, 2, 3, 4])?;
    match z.try_add(&x) {
        Ok(sum) => print!("{sum}"),
        Err(e) => eprintln!("Addition failed: {e}"),
    }

    // Neither can a shortened value list.
    let mut short = literal;
    short.truncate(10);
    if let Err(e) = x.set_values(&short) {
        eprintln!("Assignment failed: {e}");
    }

    let options = FormatOptions::builder().separator("\t").header(false).build();
    print!("{}", x.display_with(&options));

    Ok(())
}
