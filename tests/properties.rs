//! Property tests for the codec and the genotype/bitstring round-trips.
//!
//! Run with: PROPTEST_CASES=10000 cargo test --release properties

use proptest::prelude::*;

use stepnet::genetics::codec;
use stepnet::{Network, Topology};

/// A topology with 1..=4 layers of 1..=6 neurons over 1..=6 inputs
fn arb_topology() -> impl Strategy<Value = Topology> {
    prop::collection::vec(1usize..=6, 2..=5)
        .prop_map(|counts| Topology::new(counts).expect("counts are positive"))
}

/// A topology together with a genotype of exactly the required length
fn arb_network_genes() -> impl Strategy<Value = (Topology, Vec<i32>)> {
    arb_topology().prop_flat_map(|t| {
        let len = t.genotype_len();
        (Just(t), prop::collection::vec(-15i32..=15, len))
    })
}

proptest! {
    #[test]
    fn sequence_roundtrip(values in prop::collection::vec(-15i32..=15, 0..64)) {
        let bits = codec::encode_sequence(&values).unwrap();
        prop_assert_eq!(bits.len(), values.len() * codec::CODE_WIDTH);
        prop_assert_eq!(codec::decode_sequence(&bits).unwrap(), values);
    }

    #[test]
    fn out_of_range_always_rejected(v in prop_oneof![i32::MIN..-15, 16..i32::MAX]) {
        prop_assert!(codec::encode_int(v).is_err());
    }

    #[test]
    fn genotype_roundtrip((t, genes) in arb_network_genes()) {
        let net = Network::from_genotype(t, &genes).unwrap();
        prop_assert_eq!(net.to_genotype(), genes);
    }

    #[test]
    fn bitstring_roundtrip((t, genes) in arb_network_genes()) {
        let bits = codec::encode_sequence(&genes).unwrap();
        let net = Network::from_bitstring(t, &bits).unwrap();
        prop_assert_eq!(net.to_bitstring().unwrap(), bits);
    }

    #[test]
    fn short_genotype_rejected((t, genes) in arb_network_genes(), cut in 1usize..8) {
        let keep = genes.len().saturating_sub(cut);
        let result = Network::from_genotype(t, &genes[..keep]);
        prop_assert!(result.is_err());
    }

    #[test]
    fn propagation_is_deterministic(
        (t, genes) in arb_network_genes(),
        seed in prop::collection::vec(-3i32..=3, 6),
    ) {
        let input: Vec<i32> = seed.into_iter().take(t.input_arity()).collect();
        let net = Network::from_genotype(t.clone(), &genes).unwrap();

        let first = net.propagate(&input).unwrap();
        let second = net.propagate(&input).unwrap();

        prop_assert_eq!(first.len(), t.output_arity());
        prop_assert!(first.iter().all(|&s| s == 0 || s == 1));
        prop_assert_eq!(first, second);
    }
}
