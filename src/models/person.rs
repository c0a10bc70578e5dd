use super::id::RecordId;
use crate::errors::ValidationFailure;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DEFAULT_AVATAR_COLOR: &str = "#4F46E5";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Empty email is allowed (optional field).
pub fn is_valid_email(value: &str) -> bool {
    value.is_empty() || EMAIL_RE.is_match(value)
}

fn default_avatar_color() -> String {
    DEFAULT_AVATAR_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub poste: String,
    #[serde(default = "default_avatar_color")]
    pub avatar_color: String,
}

impl Person {
    pub fn from_draft(id: RecordId, draft: PersonDraft) -> Self {
        Self {
            id,
            nom: draft.nom,
            prenom: draft.prenom,
            email: draft.email,
            poste: draft.poste,
            avatar_color: draft.avatar_color,
        }
    }

    /// "Jean Dupont"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }

    /// "JD"
    pub fn initials(&self) -> String {
        self.prenom
            .chars()
            .take(1)
            .chain(self.nom.chars().take(1))
            .collect::<String>()
            .to_uppercase()
    }

    /// Editable fields, detached from the id.
    pub fn draft(&self) -> PersonDraft {
        PersonDraft {
            nom: self.nom.clone(),
            prenom: self.prenom.clone(),
            email: self.email.clone(),
            poste: self.poste.clone(),
            avatar_color: self.avatar_color.clone(),
        }
    }

    pub fn get(&self, field: PersonField) -> &str {
        match field {
            PersonField::Nom => &self.nom,
            PersonField::Prenom => &self.prenom,
            PersonField::Email => &self.email,
            PersonField::Poste => &self.poste,
            PersonField::Color => &self.avatar_color,
        }
    }

    pub fn set(&mut self, field: PersonField, value: String) {
        match field {
            PersonField::Nom => self.nom = value,
            PersonField::Prenom => self.prenom = value,
            PersonField::Email => self.email = value,
            PersonField::Poste => self.poste = value,
            PersonField::Color => self.avatar_color = value,
        }
    }
}

/// Person fields as typed in the form, without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub poste: String,
    #[serde(default = "default_avatar_color")]
    pub avatar_color: String,
}

impl PersonDraft {
    pub fn new(nom: impl Into<String>, prenom: impl Into<String>) -> Self {
        Self {
            nom: nom.into(),
            prenom: prenom.into(),
            email: String::new(),
            poste: String::new(),
            avatar_color: default_avatar_color(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_poste(mut self, poste: impl Into<String>) -> Self {
        self.poste = poste.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.avatar_color = color.into();
        self
    }

    /// Trim every field and fill an empty colour with the brand default.
    pub fn normalized(self) -> Self {
        let color = self.avatar_color.trim().to_string();
        Self {
            nom: self.nom.trim().to_string(),
            prenom: self.prenom.trim().to_string(),
            email: self.email.trim().to_string(),
            poste: self.poste.trim().to_string(),
            avatar_color: if color.is_empty() {
                default_avatar_color()
            } else {
                color
            },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.nom.trim().is_empty() {
            return Err(ValidationFailure::MissingField("nom"));
        }
        if self.prenom.trim().is_empty() {
            return Err(ValidationFailure::MissingField("prenom"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationFailure::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// A single editable cell of the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonField {
    Nom,
    Prenom,
    Email,
    Poste,
    Color,
}

impl PersonField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonField::Nom => "nom",
            PersonField::Prenom => "prenom",
            PersonField::Email => "email",
            PersonField::Poste => "poste",
            PersonField::Color => "avatar_color",
        }
    }
}
