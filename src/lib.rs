#![forbid(unsafe_code)]
//! Symbolic scalar-operation algebra.
//!
//! The semantic foundation a symbolic dynamic-optimization framework
//! dispatches through: a closed catalogue of built-in scalar operations
//! ([`OpCode`]), their static descriptors (arity, commutativity,
//! zero-absorption, print grammar — [`descriptor`]), and a generic
//! evaluation/differentiation dispatch parameterised by the operand type
//! ([`Scalar`], [`table::OpTable`], [`eval`]/[`partials`]/[`eval_and_partials`]).
//!
//! Expression graphs, sparsity inference, code generation, and the
//! integrator bindings that consume this algebra are out of scope — this
//! crate is the layer they all dispatch through, not the layer itself.
//!
//! # Example
//! ```
//! use dynopt_algebra::{OpCode, eval, eval_and_partials};
//!
//! assert_eq!(eval(OpCode::Add, 2.0_f64, 3.0), 5.0);
//!
//! let (f, d0, d1) = eval_and_partials(OpCode::Div, 6.0_f64, 2.0);
//! assert_eq!((f, d0, d1), (3.0, 0.5, -1.5));
//! ```
//!
//! # Forward-mode AD
//! ```
//! use dynopt_algebra::{Dual, OpCode, eval};
//!
//! let x = Dual::variable(2.0_f64);
//! let y = Dual::constant(3.0_f64);
//! let f = eval(OpCode::Pow, x, y); // x^3 at x=2, seeded dx=1
//! assert!((f.val - 8.0).abs() < 1e-9);
//! assert!((f.eps - 12.0).abs() < 1e-9); // d(x^3)/dx = 3x^2 = 12
//! ```

pub mod descriptor;
pub mod dispatch;
pub mod dual;
pub mod error;
pub mod op_code;
pub mod ops;
pub mod print;
pub mod scalar;
pub mod table;

#[cfg(test)]
mod tests;

pub use descriptor::{
    Arity, OpDescriptor, PrintGrammar, ZeroAbsorption, arity, descriptor, f00_is_zero,
    f0x_is_zero, fx0_is_zero, is_commutative,
};
pub use dispatch::{eval, eval_and_partials, partials};
pub use dual::Dual;
pub use error::{MissingEntry, TableBuildError};
pub use op_code::{NUM_BUILT_IN_OPS, OpCode};
pub use print::{print, print_postfix, print_prefix, print_separator, print_to_string};
pub use scalar::Scalar;
pub use table::{HasOpTable, OpTable};
