//! Fixed label sets used to classify ledger activity.
//!
//! Month names and category labels are process-wide constants; the persisted
//! format and the exports both carry the French labels verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar month labels, indexed by zero-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Distinguishes the two entry lists a month ledger keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Revenue,
    Expense,
}

impl EntryKind {
    /// Label used for the `Type` column of spreadsheet exports.
    pub fn export_label(&self) -> &'static str {
        match self {
            EntryKind::Revenue => "Revenu",
            EntryKind::Expense => "Dépense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Revenue => "revenue",
            EntryKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Revenue classifications available to every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevenueCategory {
    #[serde(rename = "Frais de garde")]
    ChildcareFees,
    #[serde(rename = "Subventions gouvernementales")]
    GovernmentGrants,
    #[serde(rename = "Frais d'inscription")]
    RegistrationFees,
    #[serde(rename = "Activités spéciales")]
    SpecialActivities,
    #[serde(rename = "Autres revenus")]
    OtherRevenue,
}

impl RevenueCategory {
    pub const ALL: [RevenueCategory; 5] = [
        RevenueCategory::ChildcareFees,
        RevenueCategory::GovernmentGrants,
        RevenueCategory::RegistrationFees,
        RevenueCategory::SpecialActivities,
        RevenueCategory::OtherRevenue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RevenueCategory::ChildcareFees => "Frais de garde",
            RevenueCategory::GovernmentGrants => "Subventions gouvernementales",
            RevenueCategory::RegistrationFees => "Frais d'inscription",
            RevenueCategory::SpecialActivities => "Activités spéciales",
            RevenueCategory::OtherRevenue => "Autres revenus",
        }
    }
}

impl fmt::Display for RevenueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expense classifications available to every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Salaires et avantages")]
    SalariesAndBenefits,
    #[serde(rename = "Alimentation")]
    Food,
    #[serde(rename = "Matériel éducatif")]
    EducationalMaterial,
    #[serde(rename = "Fournitures")]
    Supplies,
    #[serde(rename = "Loyer/Hypothèque")]
    RentOrMortgage,
    #[serde(rename = "Services publics")]
    Utilities,
    #[serde(rename = "Assurances")]
    Insurance,
    #[serde(rename = "Entretien et réparations")]
    Maintenance,
    #[serde(rename = "Formation du personnel")]
    StaffTraining,
    #[serde(rename = "Autres dépenses")]
    OtherExpenses,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::SalariesAndBenefits,
        ExpenseCategory::Food,
        ExpenseCategory::EducationalMaterial,
        ExpenseCategory::Supplies,
        ExpenseCategory::RentOrMortgage,
        ExpenseCategory::Utilities,
        ExpenseCategory::Insurance,
        ExpenseCategory::Maintenance,
        ExpenseCategory::StaffTraining,
        ExpenseCategory::OtherExpenses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::SalariesAndBenefits => "Salaires et avantages",
            ExpenseCategory::Food => "Alimentation",
            ExpenseCategory::EducationalMaterial => "Matériel éducatif",
            ExpenseCategory::Supplies => "Fournitures",
            ExpenseCategory::RentOrMortgage => "Loyer/Hypothèque",
            ExpenseCategory::Utilities => "Services publics",
            ExpenseCategory::Insurance => "Assurances",
            ExpenseCategory::Maintenance => "Entretien et réparations",
            ExpenseCategory::StaffTraining => "Formation du personnel",
            ExpenseCategory::OtherExpenses => "Autres dépenses",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Either side of the classification split, serialized as its bare label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Revenue(RevenueCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn kind(&self) -> EntryKind {
        match self {
            Category::Revenue(_) => EntryKind::Revenue,
            Category::Expense(_) => EntryKind::Expense,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Revenue(category) => category.label(),
            Category::Expense(category) => category.label(),
        }
    }
}

impl From<RevenueCategory> for Category {
    fn from(category: RevenueCategory) -> Self {
        Category::Revenue(category)
    }
}

impl From<ExpenseCategory> for Category {
    fn from(category: ExpenseCategory) -> Self {
        Category::Expense(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
