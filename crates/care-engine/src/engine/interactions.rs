use super::domain::DrugInteractionRule;
use super::rule_tables::RuleTables;

/// Returns every rule whose drugs all appear somewhere in `medications`,
/// preserving table order. Matching is case-insensitive substring matching so
/// that entries such as "Warfarin 5mg" match the "warfarin" rule.
pub fn check<S: AsRef<str>>(
    tables: &RuleTables,
    medications: &[S],
) -> Vec<DrugInteractionRule> {
    if medications.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<String> = medications
        .iter()
        .map(|medication| medication.as_ref().to_lowercase())
        .collect();

    tables
        .drug_interactions()
        .iter()
        .filter(|rule| {
            rule.drugs.iter().all(|drug| {
                let drug = drug.to_lowercase();
                normalized.iter().any(|medication| medication.contains(&drug))
            })
        })
        .copied()
        .collect()
}
