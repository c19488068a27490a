//! Macros for declaring state types.

/// Generate a `State` enum.
///
/// Each variant may carry a label used as its `name()` and as its serde
/// name; unlabelled variants use the variant identifier. The macro derives
/// `serde::Serialize` and `serde::Deserialize`, so the calling crate needs
/// `serde` as a dependency.
///
/// # Example
///
/// ```
/// use entity_fsm::core::State;
/// use entity_fsm::state_enum;
///
/// state_enum! {
///     pub enum DocState {
///         Draft = "draft",
///         Published = "published",
///         Archived,
///     }
/// }
///
/// assert_eq!(DocState::Draft.name(), "draft");
/// assert_eq!(DocState::Archived.name(), "Archived");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}
