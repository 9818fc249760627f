//! Operator overloads for the total operations.
//!
//! `/` and `%` are not overloaded: division by zero is an error, so those
//! are only available as [`Fraction::div`] and [`Fraction::modulo`].

use std::ops::{Add, Mul, Neg, Sub};

use crate::Fraction;

macro_rules! forward_binop {
    ($Trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $Trait for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                let ($a, $b) = (&self, &rhs);
                $body
            }
        }

        impl $Trait<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                let ($a, $b) = (&self, rhs);
                $body
            }
        }

        impl $Trait for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                let ($a, $b) = (self, rhs);
                $body
            }
        }
    };
}

forward_binop!(Add, add, |a, b| a.sum(b, false));
forward_binop!(Sub, sub, |a, b| a.sum(b, true));
forward_binop!(Mul, mul, |a, b| a.product(b));

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negated()
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negated()
    }
}
