use thiserror::Error;

/// The registry a key belongs to, used to qualify lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    RawMaterial,
    Product,
    Recipe,
    Menu,
    Restaurant,
    Municipality,
    Patient,
    Doctor,
    Person,
    Group,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::RawMaterial => "raw material",
            EntityKind::Product => "product",
            EntityKind::Recipe => "recipe",
            EntityKind::Menu => "menu",
            EntityKind::Restaurant => "restaurant",
            EntityKind::Municipality => "municipality",
            EntityKind::Patient => "patient",
            EntityKind::Doctor => "doctor",
            EntityKind::Person => "person",
            EntityKind::Group => "group",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    #[error("{kind} already registered: {key}")]
    Duplicate { kind: EntityKind, key: String },

    #[error("no doctor assigned to patient {ssn}")]
    NoAssignment { ssn: String },

    #[error("recipe has no ingredients: {name}")]
    EmptyRecipe { name: String },

    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DomainError {
    pub fn not_found(kind: EntityKind, key: impl Into<String>) -> Self {
        DomainError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn duplicate(kind: EntityKind, key: impl Into<String>) -> Self {
        DomainError::Duplicate {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        DomainError::Invalid {
            what,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
