use alloc::vec::Vec;

use diffcond_syntax::{Assertion, Variable};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{BitMask, Constant, GroupKey, MaskGroup, Relation};

type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

// MASK SET
// ================================================================================================

/// The masks of every group found in a list of assertions.
///
/// Groups are kept in a deterministic order:
///
/// 1. variables in the order they were first constrained;
/// 2. within a variable, its one-bits, then its zero-bits;
/// 3. then, for each partner variable in the order it was first referenced, the same-bits
///    followed by the different-bits.
///
/// Groups without any asserted bit do not exist. Asserting a bit that is already part of its
/// group has no effect.
#[derive(Debug, Clone, Default)]
pub struct MaskSet {
    variables: Map<Variable, VariableMasks>,
}

#[derive(Debug, Clone, Default)]
struct VariableMasks {
    one: Option<BitMask>,
    zero: Option<BitMask>,
    partners: Map<Variable, PartnerMasks>,
}

#[derive(Debug, Clone, Default)]
struct PartnerMasks {
    same: Option<BitMask>,
    different: Option<BitMask>,
}

/// Accessors
impl MaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of groups in the set.
    pub fn len(&self) -> usize {
        self.variables
            .values()
            .map(|masks| {
                let partners = masks
                    .partners
                    .values()
                    .map(|p| usize::from(p.same.is_some()) + usize::from(p.different.is_some()))
                    .sum::<usize>();
                usize::from(masks.one.is_some()) + usize::from(masks.zero.is_some()) + partners
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns the mask of the group identified by `key`, if any bit was asserted for it.
    pub fn get(&self, key: &GroupKey) -> Option<BitMask> {
        let masks = self.variables.get(&key.variable)?;
        match &key.relation {
            Relation::One => masks.one,
            Relation::Zero => masks.zero,
            Relation::Same(partner) => masks.partners.get(partner)?.same,
            Relation::Different(partner) => masks.partners.get(partner)?.different,
        }
    }

    /// Returns every group, in output order.
    pub fn groups(&self) -> impl Iterator<Item = MaskGroup> + '_ {
        self.variables.iter().flat_map(|(variable, masks)| {
            let fixed = [(Relation::One, masks.one), (Relation::Zero, masks.zero)];
            let related = masks.partners.iter().flat_map(|(partner, partner_masks)| {
                [
                    (Relation::Same(partner.clone()), partner_masks.same),
                    (Relation::Different(partner.clone()), partner_masks.different),
                ]
            });
            fixed.into_iter().chain(related).filter_map(move |(relation, mask)| {
                mask.map(|mask| MaskGroup::new(GroupKey::new(variable.clone(), relation), mask))
            })
        })
    }

    /// Returns the named constant of every group, in output order.
    pub fn constants(&self) -> Vec<Constant> {
        self.groups().map(|group| group.to_constant()).collect()
    }
}

/// Accumulation
impl MaskSet {
    /// Folds `assertion` into the mask of its group.
    ///
    /// Returns false if the bit was already part of the group.
    pub fn insert(&mut self, assertion: &Assertion) -> bool {
        let masks = self.variables.entry(assertion.variable().clone()).or_default();
        let slot = match assertion {
            Assertion::Fixed { value: true, .. } => &mut masks.one,
            Assertion::Fixed { value: false, .. } => &mut masks.zero,
            Assertion::Equal { other, .. } => {
                &mut masks.partners.entry(other.clone()).or_default().same
            },
            Assertion::ShiftedEqual { other, .. } => {
                &mut masks.partners.entry(other.clone()).or_default().different
            },
        };

        let inserted = slot.get_or_insert_default().insert(assertion.bit());
        if !inserted {
            log::debug!("duplicate condition '{assertion}' has no effect");
        }
        inserted
    }
}

impl<'a> Extend<&'a Assertion> for MaskSet {
    fn extend<I: IntoIterator<Item = &'a Assertion>>(&mut self, iter: I) {
        for assertion in iter {
            self.insert(assertion);
        }
    }
}

impl Extend<Assertion> for MaskSet {
    fn extend<I: IntoIterator<Item = Assertion>>(&mut self, iter: I) {
        for assertion in iter {
            self.insert(&assertion);
        }
    }
}

impl<'a> FromIterator<&'a Assertion> for MaskSet {
    fn from_iter<I: IntoIterator<Item = &'a Assertion>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl FromIterator<Assertion> for MaskSet {
    fn from_iter<I: IntoIterator<Item = Assertion>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

// EVALUATION
// ================================================================================================

/// A variable whose bits are asserted to be both 0 and 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contradiction {
    pub variable: Variable,
    pub bits: BitMask,
}

/// A group violated by a concrete assignment of values to variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub group: MaskGroup,
    /// The bits of the group that do not hold.
    pub bits: BitMask,
}

impl MaskSet {
    /// Returns the variables whose one-bits and zero-bits overlap, in output order.
    pub fn contradictions(&self) -> Vec<Contradiction> {
        self.variables
            .iter()
            .filter_map(|(variable, masks)| {
                let bits = masks.one? & masks.zero?;
                (!bits.is_empty()).then(|| Contradiction { variable: variable.clone(), bits })
            })
            .collect()
    }

    /// Evaluates every group against the values assigned by `lookup`.
    ///
    /// Groups whose variable or partner has no value are skipped; each group is checked on its
    /// own, nothing is inferred across groups.
    pub fn violations<F>(&self, lookup: F) -> Vec<Violation>
    where
        F: Fn(&Variable) -> Option<u32>,
    {
        self.groups()
            .filter_map(|group| {
                let bits = group.violated_bits(&lookup)?;
                (!bits.is_empty()).then_some(Violation { group, bits })
            })
            .collect()
    }
}
