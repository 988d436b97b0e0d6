//! # Filter and sort tables
//!
//! The dashboard shows Spanish labels while the API expects its own keys and
//! values. Every translation lives here as an enum with a static option table, so
//! a filter dimension or sort key that the server does not know cannot be built.
//!
//! ## Users listing
//!
//! | [`UserFilter`] | Label | API key |
//! |----------------|-------|---------|
//! | `RemunerationType` | Remuneración | `remunerationType` |
//! | `Position` | Puesto | `position` |
//! | `Section` | Sección | `section` |
//! | `Workshift` | Turno | `workshift` |
//! | `Status` | Estado | `isActive` |
//! | `Nationality` | Nacionalidad | `nationality` |
//! | `Role` | Rol | `role` |
//!
//! Each dimension lists its [`FilterOption`]s (label → API value). An option whose
//! `value` is `None` is shown but narrows nothing: selecting it behaves like "all".
//!
//! ## Receipts listing
//!
//! [`ReceiptFlag`] covers the three boolean status filters; [`ReceiptSort`] the two
//! date orders.

use std::fmt;

/// Label of the "no filter" choice in every filter selector.
pub const ALL_LABEL: &str = "Todas";

/// One selectable value of a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterOption {
    pub label: &'static str,
    /// Value sent to the API; `None` when the option does not narrow results.
    pub value: Option<&'static str>,
}

const fn opt(label: &'static str, value: &'static str) -> FilterOption {
    FilterOption {
        label,
        value: Some(value),
    }
}

const REMUNERATION_OPTIONS: &[FilterOption] =
    &[opt("Jornalero", "Jornalero"), opt("Por hora", "hourly")];
const POSITION_OPTIONS: &[FilterOption] = &[
    opt("Manager", "manager"),
    opt("Developer", "developer"),
    opt("Designer", "designer"),
];
const SECTION_OPTIONS: &[FilterOption] = &[
    opt("Dev", "Dev"),
    opt("Marketing", "marketing"),
    opt("IT", "it"),
];
const WORKSHIFT_OPTIONS: &[FilterOption] = &[
    opt("Mañana", "8-16"),
    opt("Tarde", "afternoon"),
    opt("Noche", "night"),
];
const STATUS_OPTIONS: &[FilterOption] = &[opt("Activo", "true"), opt("Inactivo", "false")];
const NATIONALITY_OPTIONS: &[FilterOption] = &[
    opt("Paraguaya", "Paraguaya"),
    opt("Aleman", "Aleman"),
    opt("Canadiense", "Canadiense"),
];
const ROLE_OPTIONS: &[FilterOption] = &[
    // The API has no value for administrators; the choice does not narrow results.
    FilterOption {
        label: "Administrador",
        value: None,
    },
    opt("Funcionario", "Funcionario"),
    opt("Supervisor", "Supervisor"),
];

/// Filter dimensions of the users listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserFilter {
    RemunerationType,
    Position,
    Section,
    Workshift,
    Status,
    Nationality,
    Role,
}

impl UserFilter {
    /// All dimensions in display order.
    pub const ALL: [UserFilter; 7] = [
        UserFilter::RemunerationType,
        UserFilter::Position,
        UserFilter::Section,
        UserFilter::Workshift,
        UserFilter::Status,
        UserFilter::Nationality,
        UserFilter::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserFilter::RemunerationType => "Remuneración",
            UserFilter::Position => "Puesto",
            UserFilter::Section => "Sección",
            UserFilter::Workshift => "Turno",
            UserFilter::Status => "Estado",
            UserFilter::Nationality => "Nacionalidad",
            UserFilter::Role => "Rol",
        }
    }

    /// Query-string key understood by `GET /users/`.
    pub fn api_key(self) -> &'static str {
        match self {
            UserFilter::RemunerationType => "remunerationType",
            UserFilter::Position => "position",
            UserFilter::Section => "section",
            UserFilter::Workshift => "workshift",
            UserFilter::Status => "isActive",
            UserFilter::Nationality => "nationality",
            UserFilter::Role => "role",
        }
    }

    pub fn options(self) -> &'static [FilterOption] {
        match self {
            UserFilter::RemunerationType => REMUNERATION_OPTIONS,
            UserFilter::Position => POSITION_OPTIONS,
            UserFilter::Section => SECTION_OPTIONS,
            UserFilter::Workshift => WORKSHIFT_OPTIONS,
            UserFilter::Status => STATUS_OPTIONS,
            UserFilter::Nationality => NATIONALITY_OPTIONS,
            UserFilter::Role => ROLE_OPTIONS,
        }
    }

    /// Look up an option by its label.
    pub fn option(self, label: &str) -> Option<FilterOption> {
        self.options().iter().copied().find(|o| o.label == label)
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort orders of the users listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserSort {
    #[default]
    EmployeeNumber,
    MostRecent,
    Oldest,
    FullName,
    LastName,
    Email,
}

impl UserSort {
    pub const ALL: [UserSort; 6] = [
        UserSort::EmployeeNumber,
        UserSort::MostRecent,
        UserSort::Oldest,
        UserSort::FullName,
        UserSort::LastName,
        UserSort::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserSort::EmployeeNumber => "Número",
            UserSort::MostRecent => "Más reciente",
            UserSort::Oldest => "Más antiguo",
            UserSort::FullName => "Nombre",
            UserSort::LastName => "Apellido",
            UserSort::Email => "Correo electrónico",
        }
    }

    pub fn api_key(self) -> &'static str {
        match self {
            UserSort::EmployeeNumber => "employeeNumber",
            // Spelled as the server expects it.
            UserSort::MostRecent => "modifieddAt",
            UserSort::Oldest => "createdAt",
            UserSort::FullName => "fullName",
            UserSort::LastName => "lastName",
            UserSort::Email => "email",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Boolean status filters of the receipts listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReceiptFlag {
    Sent,
    Read,
    Signed,
}

impl ReceiptFlag {
    pub const ALL: [ReceiptFlag; 3] = [ReceiptFlag::Sent, ReceiptFlag::Read, ReceiptFlag::Signed];

    pub fn label(self) -> &'static str {
        match self {
            ReceiptFlag::Sent => "Enviado",
            ReceiptFlag::Read => "Leído",
            ReceiptFlag::Signed => "Firmado",
        }
    }

    pub fn api_key(self) -> &'static str {
        match self {
            ReceiptFlag::Sent => "isSended",
            ReceiptFlag::Read => "isReaded",
            ReceiptFlag::Signed => "isSigned",
        }
    }
}

/// Date orders of the receipts listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReceiptSort {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl ReceiptSort {
    pub const ALL: [ReceiptSort; 2] = [ReceiptSort::NewestFirst, ReceiptSort::OldestFirst];

    pub fn label(self) -> &'static str {
        match self {
            ReceiptSort::NewestFirst => "Más recientes",
            ReceiptSort::OldestFirst => "Más antiguos",
        }
    }

    pub fn api_key(self) -> &'static str {
        match self {
            ReceiptSort::NewestFirst => "date_desc",
            ReceiptSort::OldestFirst => "date_asc",
        }
    }

    pub fn from_api_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.api_key() == key)
    }
}
