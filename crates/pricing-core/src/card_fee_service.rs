//! Card processing fee treatment.
//!
//! Prepaid plans: the merchant absorbs the fee. Monthly membership: the fee is added on top.
//! Monthly enrollment: the fee is netted out of the stated fee.

/// Fee absorbed by the merchant on a prepaid plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorbedFee {
    pub actual_processor_charge: f64,
    pub fee_absorbed: f64,
}

/// Fee added to the prorated membership amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurchargedFee {
    pub card_fee: f64,
    pub total_charge: f64,
}

/// Fee deducted from the enrollment fee the merchant receives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NettedFee {
    pub card_fee: f64,
    pub net_amount: f64,
}

pub struct CardFeeService;

impl CardFeeService {
    pub fn absorbed(total_price: f64, rate: f64) -> AbsorbedFee {
        let actual_processor_charge = total_price / (1.0 - rate);
        AbsorbedFee {
            actual_processor_charge,
            fee_absorbed: actual_processor_charge - total_price,
        }
    }

    pub fn surcharged(prorated_amount: f64, rate: f64) -> SurchargedFee {
        let card_fee = prorated_amount * rate;
        SurchargedFee {
            card_fee,
            total_charge: prorated_amount + card_fee,
        }
    }

    pub fn netted(enrollment_fee: f64, rate: f64) -> NettedFee {
        NettedFee {
            card_fee: enrollment_fee * rate,
            net_amount: enrollment_fee * (1.0 - rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_domain::CC_RATE;

    #[test]
    fn prepaid_fee_is_grossed_up() {
        let fee = CardFeeService::absorbed(997.0, CC_RATE);
        assert!((fee.fee_absorbed - 41.4335).abs() < 1e-3);
        assert!((fee.actual_processor_charge - 1038.4335).abs() < 1e-3);
    }

    #[test]
    fn membership_and_enrollment_fees_are_asymmetric() {
        let surcharge = CardFeeService::surcharged(155.0, CC_RATE);
        assert!((surcharge.card_fee - 6.1845).abs() < 1e-9);
        assert!((surcharge.total_charge - 161.1845).abs() < 1e-9);

        let netted = CardFeeService::netted(399.0, CC_RATE);
        assert!((netted.card_fee - 15.9201).abs() < 1e-9);
        assert!((netted.net_amount - 383.0799).abs() < 1e-9);
    }
}
