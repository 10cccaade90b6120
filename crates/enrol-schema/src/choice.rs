//! Enumerated choices
//!
//! Select and radio inputs carry a fixed set of values. The value is what
//! gets stored and rendered; the label is what the form displays.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A closed set of form values
pub trait Choice: Sized + Copy + 'static {
    /// Every variant in display order
    const VARIANTS: &'static [Self];

    /// Stored value
    fn as_str(self) -> &'static str;

    /// Display label
    fn label(self) -> &'static str;

    /// Exact-match lookup by stored value
    fn parse(value: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == value)
    }

    /// All stored values
    fn values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_str()).collect()
    }
}

/// Error returned when a string is not one of a choice's values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownChoice {
    /// Choice type name
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl Choice for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            #[inline]
            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::parse(s).ok_or_else(|| UnknownChoice {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

choice! {
    /// Highest schooling level completed or in progress
    Education, "education" {
        /// Primary school
        Basic => "básico", "Básico";
        /// Secondary school
        Secondary => "médio", "Médio";
        /// Technical school
        Technical => "técnico", "Técnico";
        /// University
        University => "universitário", "Universitário";
        /// Anything else
        Other => "outro", "Outro";
    }
}

choice! {
    /// Self-assessed knowledge level
    KnowledgeLevel, "knowledge level" {
        /// No prior experience
        Beginner => "Iniciante", "Iniciante";
        /// Some experience
        Intermediate => "Intermédio", "Intermédio";
        /// Experienced
        Advanced => "Avançado", "Avançado";
    }
}

choice! {
    /// Where the applicant heard about the program
    ReferralSource, "referral source" {
        /// Friends
        Friends => "amigos", "Amigos";
        /// Social networks
        SocialMedia => "redes sociais", "Redes Sociais";
        /// Events
        Events => "eventos", "Eventos";
        /// Anything else
        Other => "outros", "Outros";
    }
}
