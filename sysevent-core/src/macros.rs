/// Declares a closed, densely indexed input enum.
///
/// Generates `ALL`, `COUNT`, `index`, `from_index`, `name` and a `Display` impl. When the first
/// variant is marked `@unknown` it gets the discriminant `-1`, is left out of `ALL` and
/// `COUNT`, and is the `Default`; otherwise the first variant is the `Default`.
macro_rules! input_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(#[$unknown_meta:meta])*
            @unknown $unknown:ident,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        pub enum $name {
            $(#[$unknown_meta])*
            #[default]
            $unknown = -1,
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every known value, in index order.
            pub const ALL: [$name; [$(stringify!($variant)),+].len()] = [$($name::$variant),+];

            /// Number of known values.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the dense index of this value, or `None` for the unknown value.
            #[inline]
            pub const fn index(self) -> Option<usize> {
                match self {
                    $name::$unknown => None,
                    known => Some(known as i32 as usize),
                }
            }

            /// Returns the value with the given dense index.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $name::$unknown => stringify!($unknown),
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.name())
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident
            $(,
                $(#[$variant_meta:meta])*
                $variant:ident
            )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(#[$first_meta])*
            #[default]
            $first,
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every value, in index order.
            pub const ALL: [$name; [stringify!($first) $(, stringify!($variant))*].len()] =
                [$name::$first $(, $name::$variant)*];

            /// Number of values.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the dense index of this value.
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Returns the value with the given dense index.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $name::$first => stringify!($first),
                    $($name::$variant => stringify!($variant),)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.name())
            }
        }
    };
}
