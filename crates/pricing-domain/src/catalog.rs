//! The fixed price list and its lookup helpers.

use std::{collections::HashSet, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::plan::{PlanTerms, PlanTier, Program};

static STANDARD_CATALOG: Lazy<PlanCatalog> = Lazy::new(|| PlanCatalog {
    tiers: standard_tiers(),
});

/// Ordered list of plan tiers. Built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<PlanTier>", into = "Vec<PlanTier>")]
pub struct PlanCatalog {
    tiers: Vec<PlanTier>,
}

impl PlanCatalog {
    /// Validates externally supplied tiers and wraps them in a catalog.
    pub fn new(tiers: Vec<PlanTier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for tier in &tiers {
            if tier.name.trim().is_empty() {
                return Err(CatalogError::UnnamedTier);
            }
            if !seen.insert(tier.name.to_lowercase()) {
                return Err(CatalogError::DuplicateName(tier.name.clone()));
            }
            tier.validate()?;
        }
        Ok(Self { tiers })
    }

    /// The built-in fifteen-tier price list.
    pub fn standard() -> &'static PlanCatalog {
        &STANDARD_CATALOG
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tiers(&self) -> &[PlanTier] {
        &self.tiers
    }

    pub fn get(&self, index: usize) -> Option<&PlanTier> {
        self.tiers.get(index)
    }

    pub fn find(&self, program: Program, name: &str) -> Option<&PlanTier> {
        self.tiers
            .iter()
            .find(|tier| tier.program == program && tier.name == name)
    }

    /// Case-insensitive name lookup returning the tier's index.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        let needle = name.trim();
        self.tiers
            .iter()
            .position(|tier| tier.name.eq_ignore_ascii_case(needle))
    }

    /// Tiers grouped by program in display order, each paired with its catalog index.
    pub fn grouped(&self) -> Vec<(Program, Vec<(usize, &PlanTier)>)> {
        Program::ALL
            .iter()
            .filter_map(|program| {
                let entries: Vec<_> = self
                    .tiers
                    .iter()
                    .enumerate()
                    .filter(|(_, tier)| tier.program == *program)
                    .collect();
                (!entries.is_empty()).then_some((*program, entries))
            })
            .collect()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl TryFrom<Vec<PlanTier>> for PlanCatalog {
    type Error = CatalogError;

    fn try_from(tiers: Vec<PlanTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<PlanCatalog> for Vec<PlanTier> {
    fn from(catalog: PlanCatalog) -> Self {
        catalog.tiers
    }
}

impl PlanTier {
    /// Rejects negative or non-finite prices and prepaid tiers without a term.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidTier {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        match self.terms {
            PlanTerms::Monthly {
                monthly_price,
                enrollment_fee,
                ..
            } => {
                if !monthly_price.is_finite() || monthly_price < 0.0 {
                    return Err(invalid("monthly price must be a non-negative amount"));
                }
                if !enrollment_fee.is_finite() || enrollment_fee < 0.0 {
                    return Err(invalid("enrollment fee must be a non-negative amount"));
                }
            }
            PlanTerms::Prepaid {
                total_price,
                term_months,
            } => {
                if !total_price.is_finite() || total_price <= 0.0 {
                    return Err(invalid("prepaid total must be greater than zero"));
                }
                if term_months == 0 {
                    return Err(invalid("prepaid term must be at least one month"));
                }
            }
        }
        Ok(())
    }
}

fn standard_tiers() -> Vec<PlanTier> {
    let mut tiers = Vec::with_capacity(15);
    let price_list = [
        (Program::JiuJitsu, [155.0, 185.0, 220.0], [997.0, 1797.0]),
        (Program::Kickboxing, [130.0, 165.0, 200.0], [900.0, 1500.0]),
        (Program::Combined, [200.0, 220.0, 245.0], [1399.0, 2299.0]),
    ];
    for (program, [basic, standard, premium], [six_month, twelve_month]) in price_list {
        let label = program.label();
        tiers.push(PlanTier::monthly(format!("{label} Basic"), program, basic, 399.0, true));
        tiers.push(PlanTier::monthly(
            format!("{label} Standard"),
            program,
            standard,
            299.0,
            true,
        ));
        tiers.push(PlanTier::monthly(
            format!("{label} Premium"),
            program,
            premium,
            0.0,
            false,
        ));
        tiers.push(PlanTier::prepaid(
            format!("{label} 6-Month Plan"),
            program,
            six_month,
            6,
        ));
        tiers.push(PlanTier::prepaid(
            format!("{label} 12-Month Plan"),
            program,
            twelve_month,
            12,
        ));
    }
    tiers
}

#[derive(Debug, Clone, PartialEq)]
/// Errors raised while building a [`PlanCatalog`] from external data.
pub enum CatalogError {
    Empty,
    UnnamedTier,
    DuplicateName(String),
    InvalidTier { name: String, reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => f.write_str("plan catalog must contain at least one tier"),
            CatalogError::UnnamedTier => f.write_str("plan tier name must not be empty"),
            CatalogError::DuplicateName(name) => write!(f, "duplicate plan tier `{name}`"),
            CatalogError::InvalidTier { name, reason } => {
                write!(f, "invalid plan tier `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::BillingKind;

    #[test]
    fn standard_catalog_has_fifteen_tiers_in_program_order() {
        let catalog = PlanCatalog::standard();
        assert_eq!(catalog.len(), 15);

        let groups = catalog.grouped();
        assert_eq!(groups.len(), 3);
        for (program, entries) in &groups {
            assert_eq!(entries.len(), 5, "{program} should list five tiers");
            let monthly = entries
                .iter()
                .filter(|(_, tier)| tier.billing_kind() == BillingKind::Monthly)
                .count();
            assert_eq!(monthly, 3);
        }
        assert_eq!(groups[0].0, Program::JiuJitsu);
        assert_eq!(groups[2].1[0].0, 10);
    }

    #[test]
    fn standard_catalog_matches_price_list() {
        let catalog = PlanCatalog::standard();
        let basic = catalog
            .find(Program::JiuJitsu, "Jiu Jitsu Basic")
            .expect("basic tier");
        assert_eq!(
            basic.terms,
            PlanTerms::Monthly {
                monthly_price: 155.0,
                enrollment_fee: 399.0,
                has_card_fee_pass_through: true,
            }
        );

        let premium = catalog
            .find(Program::Combined, "Combined Premium")
            .expect("premium tier");
        assert_eq!(
            premium.terms,
            PlanTerms::Monthly {
                monthly_price: 245.0,
                enrollment_fee: 0.0,
                has_card_fee_pass_through: false,
            }
        );

        let prepaid = catalog
            .find(Program::Kickboxing, "Kickboxing 12-Month Plan")
            .expect("prepaid tier");
        assert_eq!(
            prepaid.terms,
            PlanTerms::Prepaid {
                total_price: 1500.0,
                term_months: 12,
            }
        );
    }

    #[test]
    fn name_lookup_ignores_case() {
        let catalog = PlanCatalog::standard();
        assert_eq!(catalog.position_by_name("kickboxing standard"), Some(6));
        assert_eq!(catalog.position_by_name("Boxing"), None);
    }

    #[test]
    fn rejects_duplicate_and_invalid_tiers() {
        let duplicate = vec![
            PlanTier::monthly("Basic", Program::JiuJitsu, 100.0, 0.0, true),
            PlanTier::monthly("basic", Program::Kickboxing, 90.0, 0.0, true),
        ];
        assert_eq!(
            PlanCatalog::new(duplicate),
            Err(CatalogError::DuplicateName("basic".into()))
        );

        let zero_term = vec![PlanTier::prepaid("Prepaid", Program::Combined, 500.0, 0)];
        assert!(matches!(
            PlanCatalog::new(zero_term),
            Err(CatalogError::InvalidTier { .. })
        ));

        assert_eq!(PlanCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn deserializing_runs_validation() {
        let json = r#"[{"name":"Promo","program":"combined","terms":{"billing":"monthly","monthly_price":-5.0,"enrollment_fee":0.0,"has_card_fee_pass_through":true}}]"#;
        let parsed: Result<PlanCatalog, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }
}
