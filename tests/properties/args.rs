//! Property tests for the record-to-positional argument mapping.

use ethers_core::abi::Token;
use ethers_core::types::U256;
use proptest::prelude::*;

use convene::domain::value_objects::ConferenceConfig;
use convene::DeploymentParameters;

fn decimal_ether_string() -> impl Strategy<Value = String> {
    (0u64..1_000_000, 1usize..=18, 1u64..1_000_000_000).prop_map(
        |(int_part, frac_len, frac_seed)| {
            let frac_part = frac_seed % 10u64.pow(frac_len as u32);
            format!("{int_part}.{frac_part:0>width$}", width = frac_len)
        },
    )
}

fn config_strategy() -> impl Strategy<Value = ConferenceConfig> {
    (
        "[A-Za-z0-9 ]{0,32}",
        decimal_ether_string(),
        any::<u64>(),
        any::<u64>(),
        "[A-Za-z0-9+/=]{0,64}",
    )
        .prop_map(
            |(name, deposit, limit_of_participants, cooling_period, encryption)| {
                ConferenceConfig {
                    name,
                    deposit,
                    limit_of_participants,
                    cooling_period,
                    encryption,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the flattening always emits five values, each position
    /// reflecting its field of the named record.
    #[test]
    fn property_each_position_reflects_its_field(config in config_strategy()) {
        let params = DeploymentParameters::resolve(&config).unwrap();
        let args = params.to_positional_args();

        prop_assert_eq!(args.len(), 5);
        prop_assert_eq!(&args[0], &Token::String(config.name.clone()));
        prop_assert_eq!(&args[1], &Token::Uint(params.deposit.as_u256()));
        prop_assert_eq!(&args[2], &Token::Uint(U256::from(config.limit_of_participants)));
        prop_assert_eq!(&args[3], &Token::Uint(U256::from(config.cooling_period)));
        prop_assert_eq!(&args[4], &Token::String(config.encryption.clone()));
    }

    /// PROPERTY: changing only the participant limit leaves every other
    /// position untouched.
    #[test]
    fn property_limit_change_is_isolated(
        config in config_strategy(),
        new_limit in any::<u64>(),
    ) {
        let base = DeploymentParameters::resolve(&config).unwrap().to_positional_args();
        let changed = DeploymentParameters::resolve(&ConferenceConfig {
            limit_of_participants: new_limit,
            ..config
        })
        .unwrap()
        .to_positional_args();

        prop_assert_eq!(&changed[2], &Token::Uint(U256::from(new_limit)));
        for position in [0, 1, 3, 4] {
            prop_assert_eq!(&base[position], &changed[position]);
        }
    }

    /// PROPERTY: changing only the name leaves every other position untouched.
    #[test]
    fn property_name_change_is_isolated(
        config in config_strategy(),
        new_name in "[A-Za-z0-9 ]{0,32}",
    ) {
        let base = DeploymentParameters::resolve(&config).unwrap().to_positional_args();
        let changed = DeploymentParameters::resolve(&ConferenceConfig {
            name: new_name.clone(),
            ..config
        })
        .unwrap()
        .to_positional_args();

        prop_assert_eq!(&changed[0], &Token::String(new_name));
        for position in [1, 2, 3, 4] {
            prop_assert_eq!(&base[position], &changed[position]);
        }
    }
}
