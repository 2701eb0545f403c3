/// A ternary expression.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads it over five lines, and the border rules of
/// the energy and cumulative maps read much better as a table of
/// one-liners: `cq!(x == 0, None, Some(x - 1))`.  Only the chosen
/// branch is evaluated, so the subtraction can't underflow.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
