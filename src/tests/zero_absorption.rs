//! For each op and each zero-absorption flag that is true, evaluating with
//! the corresponding operand pattern on finite numeric `T` yields exactly
//! `T(0)`.

use crate::descriptor::{f00_is_zero, f0x_is_zero, fx0_is_zero};
use crate::dispatch::eval;
use crate::op_code::ALL;

const NONZERO_PROBE: f64 = 3.75;

#[test]
fn f00_flag_is_sound() {
    for op in ALL {
        if f00_is_zero(op) {
            assert_eq!(
                eval(op, 0.0_f64, 0.0),
                0.0,
                "{} declares f00_is_zero but eval(op, 0, 0) != 0",
                op.name()
            );
        }
    }
}

#[test]
fn f0x_flag_is_sound() {
    for op in ALL {
        if f0x_is_zero(op) {
            assert_eq!(
                eval(op, 0.0_f64, NONZERO_PROBE),
                0.0,
                "{} declares f0x_is_zero but eval(op, 0, y) != 0",
                op.name()
            );
        }
    }
}

#[test]
fn fx0_flag_is_sound() {
    for op in ALL {
        if fx0_is_zero(op) {
            assert_eq!(
                eval(op, NONZERO_PROBE, 0.0_f64),
                0.0,
                "{} declares fx0_is_zero but eval(op, x, 0) != 0",
                op.name()
            );
        }
    }
}

#[test]
fn mul_absorbs_on_every_pattern() {
    use crate::op_code::OpCode;
    assert_eq!(eval(OpCode::Mul, 0.0_f64, 0.0), 0.0);
    assert_eq!(eval(OpCode::Mul, 0.0_f64, 7.0), 0.0);
    assert_eq!(eval(OpCode::Mul, 7.0_f64, 0.0), 0.0);
}
