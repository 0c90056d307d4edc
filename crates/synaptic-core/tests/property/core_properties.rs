use proptest::prelude::*;

use synaptic_core::config::SynapticConfig;
use synaptic_core::graph::{Heat, Node, NodeCategory, Synapse, Weight};

proptest! {
    #[test]
    fn heat_and_weight_always_clamped(value in prop::num::f64::ANY) {
        let heat = Heat::new(value).value();
        let weight = Weight::new(value).value();
        prop_assert!((0.0..=1.0).contains(&heat));
        prop_assert!((0.0..=1.0).contains(&weight));
    }

    #[test]
    fn setters_keep_unit_interval(value in -10.0f64..10.0) {
        let mut node = Node::new("n", NodeCategory::Fact, "n", "memory");
        node.set_heat(value);
        prop_assert!((0.0..=1.0).contains(&node.heat()));

        let mut synapse = Synapse::new("a", "b", 0.5);
        synapse.set_weight(value);
        prop_assert!((0.0..=1.0).contains(&synapse.weight()));
    }

    #[test]
    fn deserialized_heat_is_clamped(value in -10.0f64..10.0) {
        let heat: Heat = serde_json::from_str(&value.to_string()).unwrap();
        prop_assert!((heat.value() - value.clamp(0.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn gamma_accepted_only_in_unit_interval(gamma in -2.0f64..2.0) {
        let mut config = SynapticConfig::default();
        config.activation.gamma = gamma;
        prop_assert_eq!(config.validate().is_ok(), (0.0..=1.0).contains(&gamma));
    }

    #[test]
    fn decay_rate_accepted_only_in_open_interval(rate in -1.0f64..2.0) {
        let mut config = SynapticConfig::default();
        config.heat.decay_rate = rate;
        prop_assert_eq!(config.validate().is_ok(), rate > 0.0 && rate < 1.0);
    }
}
