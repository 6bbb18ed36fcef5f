//! Binary operator application over evaluation outcomes.

use super::EvalOutcome;
use super::error::EvalError;

/// Apply one binary operator to two already-reduced operands.
///
/// Errors short-circuit left-first: an error on the left is returned
/// unchanged without inspecting the operator or the right operand, then
/// likewise for the right. With two numbers in hand, dispatch is exhaustive
/// over `+ - * /`; any other symbol is `InvalidOperator`.
///
/// Uses wrapping arithmetic to prevent panics on overflow. Division by zero
/// returns an error; `/` truncates toward zero.
pub fn apply_op(left: EvalOutcome, op: &str, right: EvalOutcome) -> EvalOutcome {
    let left = left?;
    let right = right?;
    match op {
        "+" => Ok(left.wrapping_add(right)),
        "-" => Ok(left.wrapping_sub(right)),
        "*" => Ok(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // wrapping_div handles the i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        _ => Err(EvalError::InvalidOperator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(apply_op(Ok(2), "+", Ok(3)), Ok(5));
        assert_eq!(apply_op(Ok(-5), "+", Ok(3)), Ok(-2));
    }

    #[test]
    fn sub() {
        assert_eq!(apply_op(Ok(10), "-", Ok(4)), Ok(6));
        assert_eq!(apply_op(Ok(3), "-", Ok(10)), Ok(-7));
    }

    #[test]
    fn mul() {
        assert_eq!(apply_op(Ok(3), "*", Ok(4)), Ok(12));
        assert_eq!(apply_op(Ok(-2), "*", Ok(5)), Ok(-10));
    }

    #[test]
    fn div_truncates_toward_zero() {
        assert_eq!(apply_op(Ok(7), "/", Ok(2)), Ok(3));
        assert_eq!(apply_op(Ok(-7), "/", Ok(2)), Ok(-3));
        assert_eq!(apply_op(Ok(10), "/", Ok(2)), Ok(5));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(apply_op(Ok(5), "/", Ok(0)), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unknown_operator_is_rejected() {
        assert_eq!(apply_op(Ok(1), "%", Ok(2)), Err(EvalError::InvalidOperator));
        assert_eq!(apply_op(Ok(1), "^", Ok(2)), Err(EvalError::InvalidOperator));
    }

    #[test]
    fn left_error_takes_precedence() {
        assert_eq!(
            apply_op(
                Err(EvalError::DivisionByZero),
                "+",
                Err(EvalError::InvalidNumber)
            ),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn right_error_propagates() {
        assert_eq!(
            apply_op(Ok(1), "+", Err(EvalError::InvalidNumber)),
            Err(EvalError::InvalidNumber)
        );
    }

    #[test]
    fn left_error_skips_operator_dispatch() {
        // The operator symbol is never inspected once the left side failed.
        assert_eq!(
            apply_op(Err(EvalError::DivisionByZero), "%", Ok(2)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn wrapping_overflow() {
        // Wrap on overflow rather than panic.
        assert_eq!(apply_op(Ok(i64::MAX), "+", Ok(1)), Ok(i64::MIN));
        assert_eq!(apply_op(Ok(i64::MIN), "/", Ok(-1)), Ok(i64::MIN));
    }
}
