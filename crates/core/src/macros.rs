// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the workspace crates.

/// Generate a test-data builder: the builder struct, its `Default` impl,
/// one setter per field, `build()`, and `Target::builder()`.
///
/// `into` fields take `impl Into<Type>` (handy for `String` fields fed with
/// string literals); `set` fields take `Type` as is. Defaults of `into`
/// fields are converted with `.into()`.
///
/// Everything generated is gated on `cfg(any(test, feature = "test-support"))`
/// of the invoking crate, so the target struct must be declared under the
/// same gate.
///
/// ```ignore
/// dkc_core::builder! {
///     pub struct ImageDefinitionBuilder => ImageDefinition {
///         into { profile: String = "agent1" }
///         set { version: i64 = 1, max_instance_count: Option<i64> = Some(2) }
///     }
/// }
///
/// let definition = ImageDefinition::builder().profile("linux").version(2).build();
/// ```
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            $(into {
                $( $into_field:ident : $into_ty:ty = $into_default:expr ),* $(,)?
            })?
            $(set {
                $( $set_field:ident : $set_ty:ty = $set_default:expr ),* $(,)?
            })?
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            inner: $target,
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                Self {
                    inner: $target {
                        $($( $into_field: $into_default.into(), )*)?
                        $($( $set_field: $set_default, )*)?
                    },
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $($(
                pub fn $into_field(mut self, v: impl Into<$into_ty>) -> Self {
                    self.inner.$into_field = v.into();
                    self
                }
            )*)?
            $($(
                pub fn $set_field(mut self, v: $set_ty) -> Self {
                    self.inner.$set_field = v;
                    self
                }
            )*)?

            pub fn build(self) -> $target {
                self.inner
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            /// Start from the builder's defaults.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

#[cfg(test)]
#[path = "macros_tests.rs"]
mod tests;
