/// Declares a select-box enum whose wire form is an upper-case literal and
/// whose untouched state is the empty string.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            #[default]
            #[serde(rename = "")]
            Unset,
            $(
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $name {
            /// Selectable values, without `Unset`.
            pub const CHOICES: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $name::Unset => "",
                    $($name::$variant => $lit,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Rejection;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    "" => Ok($name::Unset),
                    $($lit => Ok($name::$variant),)+
                    _ => Err($crate::error::Rejection::UnknownChoice),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
