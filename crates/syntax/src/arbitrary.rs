//! [proptest] strategies for the condition table AST.

use alloc::{format, vec};

use proptest::prelude::*;

use crate::{Assertion, BitNumber, Variable};

impl Arbitrary for BitNumber {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (BitNumber::MIN.get()..=BitNumber::MAX.get())
            .prop_filter_map("bit number in range", BitNumber::new)
            .boxed()
    }
}

impl Arbitrary for Variable {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    /// Generates names in the style of MD5 state variables: a register letter and a step index.
    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (prop::sample::select(vec!['a', 'b', 'c', 'd']), 1u32..=64)
            .prop_map(|(register, step)| Variable::from(format!("{register}{step}")))
            .boxed()
    }
}

impl Arbitrary for Assertion {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            (any::<Variable>(), any::<BitNumber>(), any::<bool>())
                .prop_map(|(variable, bit, value)| Assertion::Fixed { variable, bit, value }),
            (any::<Variable>(), any::<BitNumber>(), any::<Variable>())
                .prop_map(|(variable, bit, other)| Assertion::Equal { variable, bit, other }),
            (any::<Variable>(), any::<BitNumber>(), any::<Variable>()).prop_map(
                |(variable, bit, other)| Assertion::ShiftedEqual { variable, bit, other }
            ),
        ]
        .boxed()
    }
}
