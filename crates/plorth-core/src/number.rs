//! The Plorth number subsystem.
//!
//! Numbers are a tagged union of a 64-bit signed integer and an IEEE-754
//! double. Arithmetic stays in the integer domain as long as both operands
//! are integers and the result fits; everything else promotes to a real.

use std::fmt;

/// A Plorth number: either an exact integer or a real.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Test whether given text is a valid number literal: an optional sign,
    /// one or more digits, an optional fraction after a dot and an optional
    /// exponent. `nan`, `inf` and `-inf` are *not* valid literals; only
    /// [`Number::parse_real`] recognizes them.
    pub fn is_valid(input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        let length = chars.len();
        let mut seen_dot = false;
        let mut seen_exponent = false;

        if length == 0 {
            return false;
        }

        let start = if chars[0] == '+' || chars[0] == '-' {
            if length < 2 {
                return false;
            }
            1
        } else {
            0
        };

        let mut i = start;
        while i < length {
            let c = chars[i];

            if c == '.' {
                if seen_dot || seen_exponent || i == start {
                    return false;
                }
                seen_dot = true;
            } else if c == 'e' || c == 'E' {
                if seen_exponent || i == start || i + 2 > length {
                    return false;
                }
                if chars[i + 1] == '+' || chars[i + 1] == '-' {
                    if i + 3 > length {
                        return false;
                    }
                    i += 1;
                }
                seen_exponent = true;
            } else if !c.is_ascii_digit() {
                return false;
            }
            i += 1;
        }

        true
    }

    /// Parse an integer literal. Digits outside the accumulator's range
    /// saturate the result to 0; characters other than digits and a leading
    /// sign are skipped.
    pub fn parse_int(input: &str) -> i64 {
        let mut chars = input.chars().peekable();
        let mut result: i64 = 0;
        let negative = match chars.peek() {
            Some('+') => {
                chars.next();
                false
            }
            Some('-') => {
                chars.next();
                true
            }
            _ => false,
        };

        for c in chars {
            let Some(digit) = c.to_digit(10) else {
                continue;
            };
            result = match result
                .checked_mul(10)
                .and_then(|r| r.checked_add(i64::from(digit)))
            {
                Some(r) => r,
                None => return 0,
            };
        }

        if negative { -result } else { result }
    }

    /// Parse a real literal. Recognizes the special spellings `nan`, `inf`
    /// and `-inf`; anything else goes through the standard float parser.
    pub fn parse_real(input: &str) -> f64 {
        match input {
            "nan" => f64::NAN,
            "inf" => f64::INFINITY,
            "-inf" => f64::NEG_INFINITY,
            _ => input.parse().unwrap_or(0.0),
        }
    }

    /// Build a number from a literal. Text containing a dot or an exponent
    /// marker parses as a real, everything else as an integer.
    pub fn from_literal(input: &str) -> Self {
        if input.contains(['.', 'e', 'E']) {
            Number::Real(Self::parse_real(input))
        } else {
            Number::Int(Self::parse_int(input))
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_real(self) -> bool {
        matches!(self, Number::Real(_))
    }

    /// Integer view of the number. Reals are truncated toward zero.
    pub fn int_value(self) -> i64 {
        match self {
            Number::Int(value) => value,
            Number::Real(value) => value.trunc() as i64,
        }
    }

    /// Real view of the number. Integers widen exactly.
    pub fn real_value(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Real(value) => value,
        }
    }

    /// Addition with int/real promotion: an integer result is kept only when
    /// both operands are integers and the sum does not overflow.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(result) => Number::Int(result),
                None => Number::Real(a as f64 + b as f64),
            },
            _ => Number::Real(self.real_value() + other.real_value()),
        }
    }

    /// Subtraction with int/real promotion.
    pub fn sub(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
                Some(result) => Number::Int(result),
                None => Number::Real(a as f64 - b as f64),
            },
            _ => Number::Real(self.real_value() - other.real_value()),
        }
    }

    /// Multiplication with int/real promotion.
    pub fn mul(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(result) => Number::Int(result),
                None => Number::Real(a as f64 * b as f64),
            },
            _ => Number::Real(self.real_value() * other.real_value()),
        }
    }

    /// Division. Always performed in the real domain, so dividing by zero
    /// yields an infinity instead of raising.
    pub fn div(self, other: Number) -> Number {
        Number::Real(self.real_value() / other.real_value())
    }

    /// Floor modulo: the result takes the sign of the divisor. Integer when
    /// both operands are integers and the divisor is nonzero.
    pub fn rem(self, other: Number) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, other) {
            if b != 0 {
                let r = a % b;
                return Number::Int(if r != 0 && (r < 0) != (b < 0) { r + b } else { r });
            }
        }

        let a = self.real_value();
        let b = other.real_value();
        let r = a % b;

        Number::Real(if r != 0.0 && r.is_sign_negative() != b.is_sign_negative() {
            r + b
        } else {
            r
        })
    }
}

impl PartialEq for Number {
    /// Numbers compare as reals when either side is a real, as integers
    /// otherwise.
    fn eq(&self, other: &Self) -> bool {
        if self.is_real() || other.is_real() {
            self.real_value() == other.real_value()
        } else {
            self.int_value() == other.int_value()
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Real(value) => write!(f, "{}", format_real(value)),
        }
    }
}

/// Shortest unambiguous rendering of a real. Magnitudes outside a readable
/// window switch to exponent notation; the three special values print as
/// `nan`, `inf` and `-inf`.
fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.into();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-5..1e15).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
