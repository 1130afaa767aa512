//! Buzzword phrases, gated by [`JargonLevel`].
//!
//! | Level   | Source                                         |
//! |---------|------------------------------------------------|
//! | Low     | none                                           |
//! | Medium  | general table                                  |
//! | High    | development-type table, else general table     |
//! | Extreme | as High, plus an extreme qualifier             |

use crate::selection::choose_or;
use crate::session::{DevelopmentType, JargonLevel};
use rand::Rng;

pub const JARGON_FALLBACK: &str = "Leveraging synergistic architecture";

const GENERAL: &[&str] = &[
    "Refactoring for horizontal scalability",
    "Applying separation of concerns at the module boundary",
    "Reducing coupling between bounded contexts",
    "Enforcing idempotency across retries",
    "Tightening the feedback loop",
];

const EXTREME_QUALIFIERS: &[&str] = &[
    "with zero-cost abstractions",
    "using a lock-free event-sourced CQRS pipeline",
    "via quantum-resistant homomorphic sharding",
    "across a self-healing service mesh",
];

fn specific(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "Implementing saga orchestration for distributed transactions",
            "Applying backpressure to the ingestion tier",
        ],
        DevelopmentType::Frontend => &[
            "Hydrating islands with partial prerendering",
            "Memoizing selectors to stabilize referential equality",
        ],
        DevelopmentType::Fullstack => &["Co-locating data loaders with route boundaries"],
        DevelopmentType::DataScience => &[
            "Regularizing the feature space with an L1 penalty",
            "Bootstrapping confidence intervals",
        ],
        DevelopmentType::DevOps => &[
            "Reconciling desired state via GitOps",
            "Canarying the rollout behind a feature flag",
        ],
        DevelopmentType::Blockchain => &["Finalizing blocks with BFT consensus"],
        DevelopmentType::MachineLearning => &[
            "Fine-tuning attention heads with LoRA adapters",
            "Annealing the learning rate with cosine warm restarts",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Eliminating false sharing across cache lines",
            "Pinning futures to avoid self-referential moves",
        ],
        DevelopmentType::GameDevelopment => &["Batching draw calls in the ECS render stage"],
        DevelopmentType::Security => &["Rotating ephemeral keys for forward secrecy"],
        DevelopmentType::Mobile => &[],
    }
}

/// A jargon phrase for `dev` at `level`, or `None` at [`JargonLevel::Low`].
pub fn jargon_phrase<R: Rng + ?Sized>(
    rng: &mut R,
    dev: DevelopmentType,
    level: JargonLevel,
) -> Option<String> {
    match level {
        JargonLevel::Low => None,
        JargonLevel::Medium => Some(choose_or(rng, GENERAL, JARGON_FALLBACK).to_string()),
        JargonLevel::High => Some(high_phrase(rng, dev).to_string()),
        JargonLevel::Extreme => {
            let base = high_phrase(rng, dev);
            let qualifier = choose_or(rng, EXTREME_QUALIFIERS, "at scale");
            Some(format!("{} {}", base, qualifier))
        }
    }
}

fn high_phrase<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    let table = specific(dev);
    if table.is_empty() {
        choose_or(rng, GENERAL, JARGON_FALLBACK)
    } else {
        choose_or(rng, table, JARGON_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_low_has_no_jargon() {
        let mut rng = StdRng::seed_from_u64(51);
        for dev in DevelopmentType::ALL {
            assert!(jargon_phrase(&mut rng, dev, JargonLevel::Low).is_none());
        }
    }

    #[test]
    fn test_medium_uses_general_table() {
        let mut rng = StdRng::seed_from_u64(52);
        let phrase = jargon_phrase(&mut rng, DevelopmentType::Security, JargonLevel::Medium).unwrap();
        assert!(GENERAL.contains(&phrase.as_str()));
    }

    #[test]
    fn test_high_uses_specific_table_when_present() {
        let mut rng = StdRng::seed_from_u64(53);
        for _ in 0..20 {
            let phrase =
                jargon_phrase(&mut rng, DevelopmentType::DevOps, JargonLevel::High).unwrap();
            assert!(specific(DevelopmentType::DevOps).contains(&phrase.as_str()));
        }
    }

    #[test]
    fn test_high_falls_back_to_general() {
        let mut rng = StdRng::seed_from_u64(54);
        let phrase = jargon_phrase(&mut rng, DevelopmentType::Mobile, JargonLevel::High).unwrap();
        assert!(GENERAL.contains(&phrase.as_str()));
    }

    #[test]
    fn test_extreme_appends_qualifier() {
        let mut rng = StdRng::seed_from_u64(55);
        let phrase =
            jargon_phrase(&mut rng, DevelopmentType::Backend, JargonLevel::Extreme).unwrap();
        assert!(EXTREME_QUALIFIERS.iter().any(|q| phrase.ends_with(q)));
    }
}
