//! Operator impls shared by the arithmetic modules.

/// `Matrix op Matrix` and `Matrix op= Matrix` for every owned/borrowed
/// combination, delegating to the fallible methods and panicking with the
/// error message when shapes differ.
macro_rules! impl_elementwise_op {
    (
        impl $op:ident { fn $method:ident } via $checked:ident,
        impl $op_assign:ident { fn $method_assign:ident } via $checked_assign:ident
    ) => {
        impl<T: $crate::Element> std::ops::$op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<T: $crate::Element> std::ops::$op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                std::ops::$op::$method(&self, rhs)
            }
        }

        impl<T: $crate::Element> std::ops::$op<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                std::ops::$op::$method(self, &rhs)
            }
        }

        impl<T: $crate::Element> std::ops::$op<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                std::ops::$op::$method(&self, &rhs)
            }
        }

        impl<T: $crate::Element> std::ops::$op_assign<&Matrix<T>> for Matrix<T> {
            #[track_caller]
            #[inline]
            fn $method_assign(&mut self, rhs: &Matrix<T>) {
                if let Err(err) = self.$checked_assign(rhs) {
                    panic!("{err}");
                }
            }
        }

        impl<T: $crate::Element> std::ops::$op_assign<Matrix<T>> for Matrix<T> {
            #[track_caller]
            #[inline]
            fn $method_assign(&mut self, rhs: Matrix<T>) {
                std::ops::$op_assign::$method_assign(self, &rhs)
            }
        }
    };
}

/// `Matrix<t> op t` and `Matrix<t> op= t` for each listed primitive `t`.
///
/// Written per type rather than generically so that the scalar and matrix
/// right-hand sides never overlap.
macro_rules! impl_scalar_op {
    (
        impl $op:ident { fn $method:ident } via $scalar:ident,
        impl $op_assign:ident { fn $method_assign:ident } via $scalar_assign:ident
        for $($t:ident)*
    ) => {
        $(
            impl std::ops::$op<$t> for &Matrix<$t> {
                type Output = Matrix<$t>;

                #[inline]
                fn $method(self, rhs: $t) -> Matrix<$t> {
                    self.$scalar(rhs)
                }
            }

            impl std::ops::$op<$t> for Matrix<$t> {
                type Output = Matrix<$t>;

                #[inline]
                fn $method(self, rhs: $t) -> Matrix<$t> {
                    self.$scalar(rhs)
                }
            }

            impl std::ops::$op_assign<$t> for Matrix<$t> {
                #[inline]
                fn $method_assign(&mut self, rhs: $t) {
                    self.$scalar_assign(rhs)
                }
            }
        )*
    };
}

/// Both operator families for one arithmetic kind over every primitive.
macro_rules! impl_arithmetic {
    (
        $op:ident, $method:ident, $op_assign:ident, $method_assign:ident,
        matrix: $checked:ident, $checked_assign:ident,
        scalar: $scalar:ident, $scalar_assign:ident
    ) => {
        impl_elementwise_op!(
            impl $op { fn $method } via $checked,
            impl $op_assign { fn $method_assign } via $checked_assign
        );
        impl_scalar_op!(
            impl $op { fn $method } via $scalar,
            impl $op_assign { fn $method_assign } via $scalar_assign
            for i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
        );
    };
}
