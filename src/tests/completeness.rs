//! Table completeness: every op has a populated evaluator and partials
//! entry, checked against every operand type this crate ships.

use crate::dual::Dual;
use crate::op_code::{ALL, NUM_BUILT_IN_OPS};
use crate::table::OpTable;

#[test]
fn f64_table_covers_every_op() {
    let table = OpTable::<f64>::build();
    for op in ALL {
        // Every op must be independently callable without panicking.
        let _ = table.eval(op, 0.5, 0.5);
    }
    assert_eq!(ALL.len(), NUM_BUILT_IN_OPS);
}

#[test]
fn f32_table_builds_and_covers_every_op() {
    let table = OpTable::<f32>::build();
    for op in ALL {
        let _ = table.eval(op, 0.5, 0.5);
    }
}

#[test]
fn dual_table_builds_and_covers_every_op() {
    let table = OpTable::<Dual<f64>>::build();
    let x = Dual::variable(0.5_f64);
    let y = Dual::constant(0.5_f64);
    for op in ALL {
        let _ = table.eval(op, x, y);
    }
}

#[test]
fn arity_and_printing_are_consistent_for_every_op() {
    use crate::descriptor::Arity;
    use crate::print::print_to_string;

    for op in ALL {
        let rendered = print_to_string(op, "x", "y");
        match crate::descriptor::arity(op) {
            Arity::One => assert!(
                !rendered.contains('y'),
                "{} is unary but its rendering mentions y: {rendered}",
                op.name()
            ),
            Arity::Two => assert!(
                rendered.contains('x') && rendered.contains('y'),
                "{} is binary but its rendering omits an operand: {rendered}",
                op.name()
            ),
        }
    }
}
