//! Operator boilerplate.
//!
//! Each arithmetic type implements an operator once, on references
//! (`&A op &B`). These macros derive the owned and mixed forms from that impl.

/// Derive `A op B`, `A op &B` and `&A op B` from `&A op &B`.
macro_rules! define_binop_variants {
    ($trait:ident, $method:ident, LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: &'b $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(&self, rhs)
            }
        }

        impl<'a> $trait<$rhs> for &'a $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(self, &rhs)
            }
        }

        impl $trait<$rhs> for $lhs {
            type Output = $out;

            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $trait<&$rhs>>::$method(&self, &rhs)
            }
        }
    };
}

/// Derive `A op= B` and `A op= &B` from `&A op &B` when the output is `A`.
macro_rules! define_assign_variants {
    ($trait:ident, $method:ident, $op:ident, $op_method:ident, LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl<'b> $trait<&'b $rhs> for $lhs {
            fn $method(&mut self, rhs: &'b $rhs) {
                *self = <&$lhs as $op<&$rhs>>::$op_method(&*self, rhs);
            }
        }

        impl $trait<$rhs> for $lhs {
            fn $method(&mut self, rhs: $rhs) {
                *self = <&$lhs as $op<&$rhs>>::$op_method(&*self, &rhs);
            }
        }
    };
}
