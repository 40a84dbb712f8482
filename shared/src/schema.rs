//! Declarative description of each record category: where it lives on the
//! backend, which fields the form edits, which columns and filters the
//! listing shows.

use serde::{Deserialize, Serialize};

use crate::categories;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    /// Ten digit Indian mobile number starting with 6-9
    Phone,
    Date,
    Number { min: Option<f64>, max: Option<f64> },
    Select(&'static [&'static str]),
    Checkbox,
    /// Nested object edited as a fieldset
    Group(&'static [FieldSpec]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn area(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn phone(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Phone)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number { min: None, max: None })
    }

    pub const fn range(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Number {
                min: Some(min),
                max: Some(max),
            },
        )
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub const fn group(
        name: &'static str,
        label: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self::new(name, label, FieldKind::Group(fields))
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Date => "date",
            FieldKind::Number { .. } => "number",
            FieldKind::Checkbox => "checkbox",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Fixed option list
    Select(&'static [&'static str]),
    /// Options loaded from the category's filter-options endpoint under this key
    Remote(&'static str),
    Text,
}

/// A listing filter; the empty value means "all".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Select(options),
        }
    }

    pub const fn remote(name: &'static str, label: &'static str, key: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Remote(key),
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub path: &'static str,
    pub label: &'static str,
}

pub const fn col(path: &'static str, label: &'static str) -> Column {
    Column { path, label }
}

/// Sidebar groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    General,
    Education,
    Health,
    SocialJustice,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::General,
        Section::Education,
        Section::Health,
        Section::SocialJustice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::General => "General",
            Section::Education => "Education",
            Section::Health => "Health",
            Section::SocialJustice => "Social Justice",
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = RecordCategory> + '_ {
        RecordCategory::ALL
            .into_iter()
            .filter(move |c| c.schema().section == *self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordCategory {
    Beneficiaries,
    StudyCenters,
    StudyCenterStudents,
    Dropouts,
    Schools,
    CompetitiveExams,
    BoardPreparation,
    HealthCamps,
    Elderly,
    MotherChild,
    Pwd,
    Adolescents,
    TbHivAddict,
    CbuCbo,
    Entitlements,
    LegalAid,
    Workshops,
}

impl RecordCategory {
    pub const ALL: [RecordCategory; 17] = [
        RecordCategory::Beneficiaries,
        RecordCategory::StudyCenters,
        RecordCategory::StudyCenterStudents,
        RecordCategory::Dropouts,
        RecordCategory::Schools,
        RecordCategory::CompetitiveExams,
        RecordCategory::BoardPreparation,
        RecordCategory::HealthCamps,
        RecordCategory::Elderly,
        RecordCategory::MotherChild,
        RecordCategory::Pwd,
        RecordCategory::Adolescents,
        RecordCategory::TbHivAddict,
        RecordCategory::CbuCbo,
        RecordCategory::Entitlements,
        RecordCategory::LegalAid,
        RecordCategory::Workshops,
    ];

    pub fn schema(&self) -> &'static CategorySchema {
        match self {
            RecordCategory::Beneficiaries => &categories::BENEFICIARIES,
            RecordCategory::StudyCenters => &categories::STUDY_CENTERS,
            RecordCategory::StudyCenterStudents => &categories::SC_STUDENTS,
            RecordCategory::Dropouts => &categories::DROPOUTS,
            RecordCategory::Schools => &categories::SCHOOLS,
            RecordCategory::CompetitiveExams => &categories::COMPETITIVE_EXAMS,
            RecordCategory::BoardPreparation => &categories::BOARD_PREPARATION,
            RecordCategory::HealthCamps => &categories::HEALTH_CAMPS,
            RecordCategory::Elderly => &categories::ELDERLY,
            RecordCategory::MotherChild => &categories::MOTHER_CHILD,
            RecordCategory::Pwd => &categories::PWD,
            RecordCategory::Adolescents => &categories::ADOLESCENTS,
            RecordCategory::TbHivAddict => &categories::TB_HIV_ADDICT,
            RecordCategory::CbuCbo => &categories::CBUCBO,
            RecordCategory::Entitlements => &categories::ENTITLEMENTS,
            RecordCategory::LegalAid => &categories::LEGAL_AID,
            RecordCategory::Workshops => &categories::WORKSHOPS,
        }
    }

    /// Match a page path, including the short top-level aliases.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| {
            let schema = c.schema();
            schema.path == path || schema.aliases.contains(&path)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySchema {
    pub category: RecordCategory,
    /// Plural page title
    pub title: &'static str,
    /// Singular noun used in notifications
    pub noun: &'static str,
    pub section: Section,
    /// Canonical page path
    pub path: &'static str,
    pub aliases: &'static [&'static str],
    /// Backend collection path
    pub endpoint: &'static str,
    /// Member holding the list in a listing response
    pub collection_key: &'static str,
    /// Member holding the document in a single-record response
    pub singular_key: &'static str,
    pub fields: &'static [FieldSpec],
    pub filters: &'static [FilterSpec],
    pub columns: &'static [Column],
    /// Whether `{endpoint}/filter-options` exists
    pub remote_filters: bool,
}

impl CategorySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        let mut parts = name.split('.');
        let first = parts.next()?;
        let mut field = self.fields.iter().find(|f| f.name == first)?;
        for part in parts {
            let FieldKind::Group(children) = field.kind else {
                return None;
            };
            field = children.iter().find(|f| f.name == part)?;
        }
        Some(field)
    }

    pub fn filter(&self, name: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|f| f.name == name)
    }

    pub fn filter_options_endpoint(&self) -> Option<String> {
        self.remote_filters
            .then(|| format!("{}/filter-options", self.endpoint))
    }
}
