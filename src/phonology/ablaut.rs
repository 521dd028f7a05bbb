//! Ablaut categories and nucleus mutation.

use std::fmt;

/// A vowel-mutation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AblautCategory {
    /// Implied marking; leaves the word unchanged.
    Default,
    /// `a` ablaut, secondary `e`.
    A,
    /// `e` ablaut, secondary `a`.
    E,
    /// `i` ablaut, secondary `y`.
    I,
    /// `y` ablaut, secondary `i`.
    Y,
    /// `o` ablaut, secondary `u`.
    O,
    /// `u` ablaut, secondary `o`.
    U,
    /// Lengthens a short final vowel, shortens a doubled one.
    Reduplication,
}

impl AblautCategory {
    /// The six categories named after a vowel letter, in checking order.
    pub const LETTERS: [Self; 6] = [Self::A, Self::E, Self::I, Self::Y, Self::O, Self::U];

    /// Returns the primary and secondary letters of a vowel-named category.
    pub const fn letter_pair(self) -> Option<(char, char)> {
        match self {
            Self::A => Some(('a', 'e')),
            Self::E => Some(('e', 'a')),
            Self::I => Some(('i', 'y')),
            Self::Y => Some(('y', 'i')),
            Self::O => Some(('o', 'u')),
            Self::U => Some(('u', 'o')),
            Self::Default | Self::Reduplication => None,
        }
    }

    /// Returns the label used in rendered glosses.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::A => "A",
            Self::E => "E",
            Self::I => "I",
            Self::Y => "Y",
            Self::O => "O",
            Self::U => "U",
            Self::Reduplication => "reduplication",
        }
    }
}

impl fmt::Display for AblautCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutates a final vowel group according to `category`.
pub(crate) fn mutate_nucleus(nucleus: &str, category: AblautCategory) -> String {
    let vowels: Vec<char> = nucleus.chars().collect();
    let Some(&last) = vowels.last() else {
        return String::new();
    };

    match category {
        AblautCategory::Default => nucleus.to_string(),
        AblautCategory::Reduplication => {
            if vowels.len() == 1 || vowels[0] != vowels[1] {
                let mut lengthened = vowels.clone();
                lengthened.push(last);
                last_two(&lengthened)
            } else {
                vowels[0].to_string()
            }
        }
        _ => {
            let Some((primary, secondary)) = category.letter_pair() else {
                return nucleus.to_string();
            };
            if last != primary {
                if vowels.len() == 1 {
                    primary.to_string()
                } else {
                    [vowels[0], primary].iter().collect()
                }
            } else {
                let mut extended = vowels.clone();
                extended.push(secondary);
                last_two(&extended)
            }
        }
    }
}

fn last_two(vowels: &[char]) -> String {
    vowels[vowels.len().saturating_sub(2)..].iter().collect()
}
