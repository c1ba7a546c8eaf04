/// Deriving a sequence-backed structure around an inner [`Sequence`](super::Sequence).
/// format is:
///```ignore
/// derive_sequence_wrapper!{Stack, Structure::Stack, "Stack has been reset."}
///```
/// The wrapper gets construction, iteration, length queries and `reset`.
/// Its own operations are written in its module.
macro_rules! derive_sequence_wrapper {
    ($(#[$attr:meta])* $name:ident, $structure:expr, $reset_text:literal) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            seq: $crate::sequences::Sequence,
        }

        impl $name {
            pub fn new() -> $name {
                $name {
                    seq: $crate::sequences::Sequence::new(),
                }
            }

            pub fn len(&self) -> usize {
                self.seq.len()
            }

            pub fn is_empty(&self) -> bool {
                self.seq.is_empty()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $crate::Value> {
                self.seq.iter()
            }

            pub fn as_slice(&self) -> &[$crate::Value] {
                self.seq.as_slice()
            }

            /// The structure this wrapper is, for wording messages.
            pub fn structure(&self) -> $crate::error::Structure {
                $structure
            }

            /// Returns an empty structure. The previous state is left as is.
            pub fn reset(&self) -> $crate::message::Outcome<$name> {
                $crate::message::Outcome::new(
                    $name::new(),
                    (),
                    $crate::message::Message::warning($reset_text),
                )
            }

            fn from_seq(seq: $crate::sequences::Sequence) -> $name {
                $name { seq }
            }
        }

        impl<V: Into<$crate::Value>> std::iter::FromIterator<V> for $name {
            fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
                $name::from_seq(iter.into_iter().collect())
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $crate::Value;
            type IntoIter = std::slice::Iter<'a, $crate::Value>;
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}
