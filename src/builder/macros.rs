//! Macros for ergonomic state machine construction.

/// Declare a field-less enum usable as a state or trigger identifier.
///
/// The generated enum derives everything the engine and the graph export
/// need (`Clone`, `Copy`, `Debug`, total ordering, `Hash`, serde) and
/// implements `Display` with the variant name.
///
/// # Example
///
/// ```
/// use statum::fsm_enum;
///
/// fsm_enum! {
///     pub enum Door {
///         Opened,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Locked.to_string(), "Locked");
/// assert!(Door::Opened < Door::Closed);
/// ```
#[macro_export]
macro_rules! fsm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let name = match self {
                    $(Self::$variant => stringify!($variant)),*
                };
                f.write_str(name)
            }
        }
    };
}
