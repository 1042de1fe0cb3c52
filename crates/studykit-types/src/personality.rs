use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 16 four-letter personality types.
///
/// Variant order is the canonical display order and doubles as the index
/// into the static catalog (see [`PersonalityType::index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::Istj,
        PersonalityType::Isfj,
        PersonalityType::Infj,
        PersonalityType::Intj,
        PersonalityType::Istp,
        PersonalityType::Isfp,
        PersonalityType::Infp,
        PersonalityType::Intp,
        PersonalityType::Estp,
        PersonalityType::Esfp,
        PersonalityType::Enfp,
        PersonalityType::Entp,
        PersonalityType::Estj,
        PersonalityType::Esfj,
        PersonalityType::Enfj,
        PersonalityType::Entj,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PersonalityType::Istj => "ISTJ",
            PersonalityType::Isfj => "ISFJ",
            PersonalityType::Infj => "INFJ",
            PersonalityType::Intj => "INTJ",
            PersonalityType::Istp => "ISTP",
            PersonalityType::Isfp => "ISFP",
            PersonalityType::Infp => "INFP",
            PersonalityType::Intp => "INTP",
            PersonalityType::Estp => "ESTP",
            PersonalityType::Esfp => "ESFP",
            PersonalityType::Enfp => "ENFP",
            PersonalityType::Entp => "ENTP",
            PersonalityType::Estj => "ESTJ",
            PersonalityType::Esfj => "ESFJ",
            PersonalityType::Enfj => "ENFJ",
            PersonalityType::Entj => "ENTJ",
        }
    }

    /// Position in [`PersonalityType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The four preference letters, in code order.
    pub fn preferences(self) -> [Preference; 4] {
        let code = self.code().as_bytes();
        [
            if code[0] == b'E' {
                Preference::Extraversion
            } else {
                Preference::Introversion
            },
            if code[1] == b'S' {
                Preference::Sensing
            } else {
                Preference::Intuition
            },
            if code[2] == b'T' {
                Preference::Thinking
            } else {
                Preference::Feeling
            },
            if code[3] == b'J' {
                Preference::Judging
            } else {
                Preference::Perceiving
            },
        ]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        PersonalityType::ALL
            .into_iter()
            .find(|t| t.code() == wanted)
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// One pole of one of the four preference axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Extraversion,
    Introversion,
    Sensing,
    Intuition,
    Thinking,
    Feeling,
    Judging,
    Perceiving,
}

impl Preference {
    pub fn letter(self) -> char {
        match self {
            Preference::Extraversion => 'E',
            Preference::Introversion => 'I',
            Preference::Sensing => 'S',
            Preference::Intuition => 'N',
            Preference::Thinking => 'T',
            Preference::Feeling => 'F',
            Preference::Judging => 'J',
            Preference::Perceiving => 'P',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Preference::Extraversion),
            'I' => Some(Preference::Introversion),
            'S' => Some(Preference::Sensing),
            'N' => Some(Preference::Intuition),
            'T' => Some(Preference::Thinking),
            'F' => Some(Preference::Feeling),
            'J' => Some(Preference::Judging),
            'P' => Some(Preference::Perceiving),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preference::Extraversion => "Extraversion",
            Preference::Introversion => "Introversion",
            Preference::Sensing => "Sensing",
            Preference::Intuition => "Intuition",
            Preference::Thinking => "Thinking",
            Preference::Feeling => "Feeling",
            Preference::Judging => "Judging",
            Preference::Perceiving => "Perceiving",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for t in PersonalityType::ALL {
            assert_eq!(t.code().parse::<PersonalityType>(), Ok(t));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive_and_trims() {
        assert_eq!(" enfp ".parse::<PersonalityType>(), Ok(PersonalityType::Enfp));
        assert_eq!("IntJ".parse::<PersonalityType>(), Ok(PersonalityType::Intj));
    }

    #[test]
    fn test_from_str_rejects_unknown_codes() {
        assert_eq!(
            "XXXX".parse::<PersonalityType>(),
            Err(Error::UnknownType("XXXX".to_string()))
        );
        assert!("INTJ-A".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, t) in PersonalityType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_preferences_follow_code_letters() {
        assert_eq!(
            PersonalityType::Enfp.preferences(),
            [
                Preference::Extraversion,
                Preference::Intuition,
                Preference::Feeling,
                Preference::Perceiving,
            ]
        );
        for t in PersonalityType::ALL {
            let letters: String = t.preferences().iter().map(|p| p.letter()).collect();
            assert_eq!(letters, t.code());
        }
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&PersonalityType::Istj).unwrap();
        assert_eq!(json, "\"ISTJ\"");
        let back: PersonalityType = serde_json::from_str("\"ENTJ\"").unwrap();
        assert_eq!(back, PersonalityType::Entj);
    }
}
