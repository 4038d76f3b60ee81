//! `eval_and_partials`'s aliasing/ordering soundness, and commutativity-flag
//! soundness (`is_commutative(op) == true` implies
//! `eval(op, x, y) == eval(op, y, x)`).

use crate::descriptor::{Arity, arity, is_commutative};
use crate::dispatch::{eval, eval_and_partials, partials};
use crate::op_code::{ALL, OpCode};

#[test]
fn eval_and_partials_agrees_with_separate_eval_then_partials() {
    let samples: [(f64, f64); 3] = [(1.3, 2.7), (4.0, 2.0), (0.9, 0.4)];
    // ASIN/ACOS need |x| <= 1; 1.3 and 4.0 above are out of domain and would
    // evaluate to NaN, making the NaN != NaN assert_eq! below spuriously fail.
    let skip = [
        OpCode::Step,
        OpCode::Floor,
        OpCode::Ceil,
        OpCode::Equality,
        OpCode::Asin,
        OpCode::Acos,
    ];

    for op in ALL {
        if skip.contains(&op) {
            continue;
        }
        for (x, y) in samples {
            let f = eval(op, x, y);
            let (d0, d1) = partials(op, x, y, f);
            let (f2, d0_2, d1_2) = eval_and_partials(op, x, y);
            assert_eq!(f, f2, "{}: eval_and_partials's f disagrees with eval", op.name());
            assert_eq!(
                (d0, d1),
                (d0_2, d1_2),
                "{}: eval_and_partials's partials disagree with a separate partials call",
                op.name()
            );
        }
    }
}

#[test]
fn commutative_flag_is_sound_on_a_sample_grid() {
    // Only binary ops actually read both operands; a unary op's "commutative"
    // flag describes something else (trivial, single-operand symmetry) and
    // swapping x/y would just compare eval at two unrelated points.
    let samples: [(f64, f64); 4] = [(1.3, 2.7), (4.0, 2.0), (0.9, 0.4), (0.0, 5.0)];

    for op in ALL {
        if arity(op) != Arity::Two || !is_commutative(op) {
            continue;
        }
        for (x, y) in samples {
            let forward = eval(op, x, y);
            let backward = eval(op, y, x);
            assert_eq!(
                forward, backward,
                "{} is flagged commutative but eval(op, {x}, {y}) != eval(op, {y}, {x})",
                op.name()
            );
        }
    }
}

#[test]
fn printme_is_the_identity_through_dispatch() {
    assert_eq!(eval(OpCode::Printme, 7.5_f64, 0.0), 7.5);
}
