//! Accessor generation macros.
//!
//! Uses `paste` for identifier concatenation.

/// Generate `is_xxx`, `as_xxx`, `as_xxx_mut` for enums whose variants each
/// wrap one payload.
///
/// Each entry is `method_stem => PayloadType`; the variant name is the
/// camel-cased stem. Boxed payloads are coerced to the payload type.
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text, block -> Block
///     impl_enum_accessors!(element => Element, text => Text, block => ContentBlock);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident => $payload:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get the " $variant " payload"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&$payload> {
                    match self { Self::[<$variant:camel>](v) => Some(v as &$payload), _ => None }
                }

                #[doc = "Try to get the " $variant " payload mutably"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut $payload> {
                    match self { Self::[<$variant:camel>](v) => Some(v as &mut $payload), _ => None }
                }
            )*
        }
    };
}
