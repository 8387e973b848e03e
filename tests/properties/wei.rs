//! Property tests for the wei fixed-point conversion.

use ethers_core::types::U256;
use proptest::prelude::*;

use convene::Wei;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `from_ether` never panics on arbitrary input.
    #[test]
    fn property_from_ether_never_panics(s in ".{0,40}") {
        let _ = Wei::from_ether(&s);
    }

    /// PROPERTY: whole ether amounts scale by exactly 10^18.
    #[test]
    fn property_whole_ether_scales_by_exp18(n in 0u64..1_000_000) {
        let wei = Wei::from_ether(&n.to_string()).unwrap();
        prop_assert_eq!(wei.as_u256(), U256::from(n) * U256::exp10(18));
    }

    /// PROPERTY: fractional ether amounts follow 18-decimal fixed point:
    /// `int.frac` (frac of length k) becomes `int*10^18 + frac*10^(18-k)`.
    #[test]
    fn property_fractional_ether_is_18_decimal_fixed_point(
        int_part in 0u64..1_000_000,
        frac_len in 1usize..=18,
        frac_seed in 1u64..1_000_000_000,
    ) {
        let frac_max = 10u64.pow(frac_len as u32);
        let frac_part = frac_seed % frac_max;
        let amount = format!("{int_part}.{frac_part:0>width$}", width = frac_len);

        let wei = Wei::from_ether(&amount).unwrap();
        let expected = U256::from(int_part) * U256::exp10(18)
            + U256::from(frac_part) * U256::exp10(18 - frac_len);
        prop_assert_eq!(wei.as_u256(), expected, "amount string: {}", amount);
    }

    /// PROPERTY: converting with the "wei" unit is the identity.
    #[test]
    fn property_wei_unit_is_identity(n in any::<u128>()) {
        let wei = Wei::from_decimal(&n.to_string(), "wei").unwrap();
        prop_assert_eq!(wei.as_u256(), U256::from(n));
    }
}
