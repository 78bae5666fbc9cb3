//! Chain of responsibility: discount handlers tried in order until one applies.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One link configuration: discount `rate` applies from `threshold` upwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiscountTier {
    pub threshold: f64,
    pub rate: f64,
}

/// Discount granted by the handler that accepted the purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedDiscount {
    pub rate: f64,
    pub amount: f64,
}

pub trait DiscountHandler {
    /// Returns `None` when neither this handler nor any successor applies.
    fn handle(&self, purchase: f64) -> Option<AppliedDiscount>;
}

/// Applies its rate when the purchase reaches the threshold, otherwise defers.
pub struct ThresholdDiscount {
    tier: DiscountTier,
    next: Option<Box<dyn DiscountHandler>>,
}

impl ThresholdDiscount {
    pub fn new(threshold: f64, rate: f64) -> Self {
        Self {
            tier: DiscountTier { threshold, rate },
            next: None,
        }
    }

    pub fn with_next(mut self, next: impl DiscountHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl DiscountHandler for ThresholdDiscount {
    fn handle(&self, purchase: f64) -> Option<AppliedDiscount> {
        if purchase >= self.tier.threshold {
            debug!(rate = self.tier.rate, "discount tier applied");
            return Some(AppliedDiscount {
                rate: self.tier.rate,
                amount: purchase * self.tier.rate,
            });
        }
        self.next.as_ref().and_then(|next| next.handle(purchase))
    }
}

/// Head of a chain built from configured tiers.
pub struct DiscountChain {
    head: Option<Box<dyn DiscountHandler>>,
}

impl DiscountChain {
    /// Link tiers in the given order; the first tier is asked first.
    pub fn from_tiers(tiers: &[DiscountTier]) -> Self {
        let head = tiers.iter().rev().fold(None, |next, tier| {
            let mut link = ThresholdDiscount::new(tier.threshold, tier.rate);
            link.next = next;
            Some(Box::new(link) as Box<dyn DiscountHandler>)
        });
        Self { head }
    }
}

impl DiscountHandler for DiscountChain {
    fn handle(&self, purchase: f64) -> Option<AppliedDiscount> {
        self.head.as_ref().and_then(|head| head.handle(purchase))
    }
}

/// Discount amount, `0.0` when no handler applies.
pub fn discount_for(handler: &dyn DiscountHandler, purchase: f64) -> f64 {
    handler.handle(purchase).map_or(0.0, |applied| applied.amount)
}

/// Human-readable outcome of running a purchase through the chain.
#[instrument(level = "debug", skip(handler))]
pub fn checkout_summary(handler: &dyn DiscountHandler, purchase: f64) -> Vec<String> {
    match handler.handle(purchase) {
        Some(applied) => vec![
            format!("{}% discount applied", (applied.rate * 100.0).round()),
            format!("Total with discount: {}", purchase - applied.amount),
        ],
        None => vec!["No discount could be applied.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descending_tiers() -> Vec<DiscountTier> {
        vec![
            DiscountTier { threshold: 300.0, rate: 0.30 },
            DiscountTier { threshold: 200.0, rate: 0.20 },
            DiscountTier { threshold: 100.0, rate: 0.10 },
        ]
    }

    #[rstest]
    #[case(250.0, 50.0)]
    #[case(120.0, 12.0)]
    #[case(400.0, 120.0)]
    #[case(50.0, 0.0)]
    fn given_descending_chain_when_handling_then_highest_matching_tier_wins(
        #[case] purchase: f64,
        #[case] expected: f64,
    ) {
        let chain = DiscountChain::from_tiers(&descending_tiers());
        let discount = discount_for(&chain, purchase);
        assert!((discount - expected).abs() < 1e-9, "got {discount}");
    }

    #[test]
    fn given_ascending_chain_when_handling_then_first_match_wins() {
        let mut tiers = descending_tiers();
        tiers.reverse();
        let chain = DiscountChain::from_tiers(&tiers);

        let applied = chain.handle(250.0).expect("tier applies");

        assert_eq!(applied.rate, 0.10);
    }

    #[test]
    fn given_empty_chain_when_handling_then_falls_back_to_zero() {
        let chain = DiscountChain::from_tiers(&[]);
        assert_eq!(discount_for(&chain, 1000.0), 0.0);
    }

    #[test]
    fn given_manually_linked_handlers_when_handling_then_defers_to_next() {
        let chain = ThresholdDiscount::new(200.0, 0.20).with_next(ThresholdDiscount::new(100.0, 0.10));
        assert_eq!(chain.handle(150.0).map(|a| a.rate), Some(0.10));
        assert_eq!(chain.handle(90.0), None);
    }

    #[test]
    fn given_no_discount_when_summarizing_then_reports_it() {
        let chain = DiscountChain::from_tiers(&descending_tiers());
        assert_eq!(
            checkout_summary(&chain, 10.0),
            vec!["No discount could be applied."]
        );
        assert_eq!(checkout_summary(&chain, 250.0)[1], "Total with discount: 200");
    }
}
