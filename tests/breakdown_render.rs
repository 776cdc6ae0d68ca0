use gym_pricing::cli::ui::{breakdown_lines, render_plain};
use pricing_core::PricingSession;
use pricing_domain::{BillingPeriod, DiscountInputs, DiscountTarget, PlanCatalog, PricingRules};

fn session(total_days: u32, days_remaining: u32) -> PricingSession {
    PricingSession::with_period(
        PlanCatalog::standard().clone(),
        PricingRules::default(),
        BillingPeriod::new(total_days, days_remaining).expect("valid period"),
        None,
    )
    .expect("session starts")
}

#[test]
fn renders_single_enrollee_monthly_breakdown() {
    let session = session(30, 30);
    let quote = session
        .quote_by_name("Jiu Jitsu Basic", 1, DiscountInputs::none())
        .expect("quote");
    let lines = breakdown_lines(&quote.breakdown, session.rules().card_fee_rate);

    insta::assert_snapshot!(render_plain(&lines).trim_end(), @r###"
Membership Charges:
  Monthly Rate                             $155.00
  Daily Rate (based on 30-day month)         $5.17
  Days Left in Month                            30
  Prorated Amount                          $155.00
  CC Processing Fee (3.99%)                  $6.18
  Total Membership Charge                  $161.18
Enrollment Fee:
  Enrollment Fee                           $399.00
  CC Processing Fee (3.99%)                -$15.92
  Enrollment Charge                        $383.08
Total Amount Customer Pays:                $544.26
"###);
}

#[test]
fn renders_family_plan_with_enrollment_discounts() {
    let session = session(31, 12);
    let discounts = DiscountInputs::none()
        .with_flat(20.0)
        .with_percentage(10.0, DiscountTarget::Enrollment);
    let quote = session
        .quote_by_name("Combined Standard", 4, discounts)
        .expect("quote");
    let lines = breakdown_lines(&quote.breakdown, session.rules().card_fee_rate);

    insta::assert_snapshot!(render_plain(&lines).trim_end(), @r###"
Membership Charges:
  Family Plan Rate (4 enrollees)           $470.00
  Daily Rate (based on 31-day month)        $15.16
  Days Left in Month                            12
  Prorated Amount                          $181.94
  CC Processing Fee (3.99%)                  $7.26
  Total Membership Charge                  $189.19
Enrollment Fee:
  Enrollment Fee                            $99.00
  Enrollment Discount                       -$9.90
  Flat Discount                            -$20.00
  Discounted Enrollment Fee                 $69.10
  CC Processing Fee (3.99%)                 -$2.76
  Enrollment Charge                         $66.34
Total Amount Customer Pays:                $255.54
"###);
}

#[test]
fn premium_tier_has_no_enrollment_section() {
    let session = session(30, 15);
    let quote = session
        .quote_by_name("Kickboxing Premium", 1, DiscountInputs::none())
        .expect("quote");
    let text = render_plain(&breakdown_lines(
        &quote.breakdown,
        session.rules().card_fee_rate,
    ));
    assert!(!text.contains("Enrollment Fee:"));
    assert!(text.contains("Days Left in Month"));
}
