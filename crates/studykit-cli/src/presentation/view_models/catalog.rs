use serde::Serialize;
use std::fmt;
use studykit_types::{BonusTip, PersonalityType, TypeProfile};

#[derive(Debug, Serialize)]
pub struct TypeEntry {
    pub code: PersonalityType,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TypeListViewModel {
    pub types: Vec<TypeEntry>,
    /// Set when the catalog was validated with `types --check`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_valid: Option<bool>,
}

impl TypeListViewModel {
    pub fn from_catalog(catalog: &[TypeProfile]) -> Self {
        Self {
            types: catalog
                .iter()
                .map(|p| TypeEntry {
                    code: p.code,
                    name: p.name.to_string(),
                })
                .collect(),
            catalog_valid: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TipEntry {
    pub letter: char,
    pub preference: String,
    pub text: String,
}

impl From<&BonusTip> for TipEntry {
    fn from(tip: &BonusTip) -> Self {
        Self {
            letter: tip.preference.letter(),
            preference: tip.preference.label().to_string(),
            text: tip.text.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileViewModel {
    pub code: PersonalityType,
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub methods: Vec<String>,
    pub tools: Vec<String>,
    pub tips: Vec<TipEntry>,
}

impl ProfileViewModel {
    pub fn new(profile: &TypeProfile, tips: &[&BonusTip]) -> Self {
        Self {
            code: profile.code,
            name: profile.name.to_string(),
            strengths: owned(profile.strengths),
            weaknesses: owned(profile.weaknesses),
            methods: owned(profile.methods),
            tools: owned(profile.tools),
            tips: tips.iter().map(|tip| TipEntry::from(*tip)).collect(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl fmt::Display for TypeListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::presentation::views::catalog::TypeListView::new(self))
    }
}

impl fmt::Display for ProfileViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::presentation::views::catalog::ProfileView::new(self))
    }
}
