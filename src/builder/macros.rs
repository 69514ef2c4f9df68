//! Macros for ergonomic state definitions.

/// Generate a `State` implementation for a simple enum.
///
/// Each variant's name is its identifier. A description may follow the
/// variant after `=>`.
///
/// # Example
///
/// ```
/// use statewalk::core::State;
/// use statewalk::state_enum;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Fred => "Fred Flintstone",
///     }
/// }
///
/// assert_eq!(Turnstile::Fred.name(), "Fred");
/// assert_eq!(Turnstile::Fred.description(), "Fred Flintstone");
/// assert_eq!(Turnstile::Locked.description(), "");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $description:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn description(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__state_description!($($description)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __state_description {
    () => {
        ""
    };
    ($description:literal) => {
        $description
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Vertex};

    state_enum! {
        enum TestState {
            Locked,
            Unlocked,
            Fred => "Fred Flintstone",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Locked.name(), "Locked");
        assert_eq!(TestState::Unlocked.name(), "Unlocked");
        assert_eq!(TestState::Fred.name(), "Fred");
    }

    #[test]
    fn state_enum_supports_descriptions() {
        assert_eq!(TestState::Locked.description(), "");
        assert_eq!(TestState::Fred.description(), "Fred Flintstone");
    }

    #[test]
    fn state_enum_converts_into_vertex() {
        let vertex: Vertex<TestState> = TestState::Fred.into();
        assert_eq!(vertex.name(), "Fred");
        assert_eq!(vertex.description(), "Fred Flintstone");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        assert_eq!(PublicState::B.name(), "B");
    }
}
