use rand::Rng;

use crate::lexicon::{self, ResponsePool, GENERAL_BANK};
use crate::models::{ObjectionCategory, ResponseParts};

/// Industry-keyed bank lookup. Only the general bank exists today; unknown
/// industries fall back to it, so industry-specific phrasing is a data
/// addition rather than a code change.
fn bank_for(industry: &str) -> &'static [ResponsePool] {
    match industry {
        "general" => GENERAL_BANK,
        _ => GENERAL_BANK,
    }
}

/// Picks one acknowledge/reframe/engage phrase for the category, uniformly
/// at random from the bank's pools. `none` always yields the fixed neutral
/// triple.
pub fn generate_response<R: Rng>(
    rng: &mut R,
    category: ObjectionCategory,
    industry: &str,
) -> ResponseParts {
    let Some(pool) = bank_for(industry).iter().find(|p| p.category == category) else {
        return ResponseParts {
            acknowledge: lexicon::NEUTRAL_ACKNOWLEDGE.to_string(),
            reframe: lexicon::NEUTRAL_REFRAME.to_string(),
            engage: lexicon::NEUTRAL_ENGAGE.to_string(),
        };
    };

    ResponseParts {
        acknowledge: pick(rng, pool.acknowledge),
        reframe: pick(rng, pool.reframe),
        engage: pick(rng, pool.engage),
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn none_category_always_yields_the_neutral_triple() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let parts = generate_response(&mut rng, ObjectionCategory::None, "general");
            assert_eq!(parts.acknowledge, lexicon::NEUTRAL_ACKNOWLEDGE);
            assert_eq!(parts.reframe, lexicon::NEUTRAL_REFRAME);
            assert_eq!(parts.engage, lexicon::NEUTRAL_ENGAGE);
        }
    }

    #[test]
    fn generated_parts_come_from_the_category_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = GENERAL_BANK
            .iter()
            .find(|p| p.category == ObjectionCategory::Price)
            .unwrap();
        for _ in 0..20 {
            let parts = generate_response(&mut rng, ObjectionCategory::Price, "general");
            assert!(pool.acknowledge.contains(&parts.acknowledge.as_str()));
            assert!(pool.reframe.contains(&parts.reframe.as_str()));
            assert!(pool.engage.contains(&parts.engage.as_str()));
        }
    }

    #[test]
    fn seeded_rng_makes_selection_reproducible() {
        let first = generate_response(
            &mut StdRng::seed_from_u64(99),
            ObjectionCategory::Trust,
            "general",
        );
        let second = generate_response(
            &mut StdRng::seed_from_u64(99),
            ObjectionCategory::Trust,
            "general",
        );
        assert_eq!(first.acknowledge, second.acknowledge);
        assert_eq!(first.reframe, second.reframe);
        assert_eq!(first.engage, second.engage);
    }

    #[test]
    fn unknown_industry_falls_back_to_the_general_bank() {
        let mut rng = StdRng::seed_from_u64(3);
        let parts = generate_response(&mut rng, ObjectionCategory::Time, "healthcare");
        let pool = GENERAL_BANK
            .iter()
            .find(|p| p.category == ObjectionCategory::Time)
            .unwrap();
        assert!(pool.acknowledge.contains(&parts.acknowledge.as_str()));
    }

    #[test]
    fn every_detectable_category_has_a_pool() {
        for category in ObjectionCategory::DETECTABLE {
            assert!(
                GENERAL_BANK.iter().any(|p| p.category == category),
                "missing pool for {category}"
            );
        }
    }
}
