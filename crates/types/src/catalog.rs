//! Catalogs of compliance dates and compliance flags.
//!
//! The order of [`DateField::ALL`] and [`FlagField::ALL`] is the order used by
//! the form, the roster view and both exports. Spreadsheets downstream depend
//! on it, so new entries go at the end.

use serde::{Deserialize, Serialize};

/// A named compliance expiration date.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DateField {
    Induction,
    OccupationalHealth,
    Nr10,
    Nr10Sep,
    Nr11,
    Nr12,
    Nr18,
    Nr18Scaffolding,
    Nr20,
    Nr33,
    Nr35,
    Nr34,
    PgroPcmat,
    Pcmso,
    Ppr,
    Loto,
    PtaPlatform,
}

impl DateField {
    pub const ALL: &'static [DateField] = &[
        DateField::Induction,
        DateField::OccupationalHealth,
        DateField::Nr10,
        DateField::Nr10Sep,
        DateField::Nr11,
        DateField::Nr12,
        DateField::Nr18,
        DateField::Nr18Scaffolding,
        DateField::Nr20,
        DateField::Nr33,
        DateField::Nr35,
        DateField::Nr34,
        DateField::PgroPcmat,
        DateField::Pcmso,
        DateField::Ppr,
        DateField::Loto,
        DateField::PtaPlatform,
    ];

    /// Dates that must be present before a record can be created, in the
    /// order validation checks them.
    pub const REQUIRED: &'static [DateField] = &[
        DateField::Induction,
        DateField::OccupationalHealth,
        DateField::PgroPcmat,
        DateField::Pcmso,
    ];

    /// Operator-facing label; doubles as the CSV column header.
    pub fn label(self) -> &'static str {
        match self {
            DateField::Induction => "Integração",
            DateField::OccupationalHealth => "ASO",
            DateField::Nr10 => "NR10",
            DateField::Nr10Sep => "NR10 SEP",
            DateField::Nr11 => "NR11",
            DateField::Nr12 => "NR12",
            DateField::Nr18 => "NR18",
            DateField::Nr18Scaffolding => "NR18 Andaime",
            DateField::Nr20 => "NR20",
            DateField::Nr33 => "NR33",
            DateField::Nr35 => "NR35",
            DateField::Nr34 => "NR34",
            DateField::PgroPcmat => "PGRO/PCMAT",
            DateField::Pcmso => "PCMSO",
            DateField::Ppr => "PPR",
            DateField::Loto => "Loto",
            DateField::PtaPlatform => "PTA Plataforma",
        }
    }

    /// Stable key used in the JSON mail body.
    pub fn key(self) -> &'static str {
        match self {
            DateField::Induction => "integracao",
            DateField::OccupationalHealth => "aso",
            DateField::Nr10 => "nr10",
            DateField::Nr10Sep => "nr10Sep",
            DateField::Nr11 => "nr11",
            DateField::Nr12 => "nr12",
            DateField::Nr18 => "nr18",
            DateField::Nr18Scaffolding => "nr18Andaime",
            DateField::Nr20 => "nr20",
            DateField::Nr33 => "nr33",
            DateField::Nr35 => "nr35",
            DateField::Nr34 => "nr34",
            DateField::PgroPcmat => "pgroPcmat",
            DateField::Pcmso => "pcmso",
            DateField::Ppr => "ppr",
            DateField::Loto => "loto",
            DateField::PtaPlatform => "ptaPlataforma",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// A named yes/no compliance checklist item.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlagField {
    Training,
    WorkOrder,
    Documentation,
    RiskAnalysis,
    Ppe,
    SafetyCommittee,
}

impl FlagField {
    pub const ALL: &'static [FlagField] = &[
        FlagField::Training,
        FlagField::WorkOrder,
        FlagField::Documentation,
        FlagField::RiskAnalysis,
        FlagField::Ppe,
        FlagField::SafetyCommittee,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FlagField::Training => "Treinamento",
            FlagField::WorkOrder => "OS",
            FlagField::Documentation => "Documentação",
            FlagField::RiskAnalysis => "APR/PAE",
            FlagField::Ppe => "EPI",
            FlagField::SafetyCommittee => "CIPA",
        }
    }
}
