//! The contact model registry.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use super::{CombineRule, ContactCoefficient};
use crate::error::ParameterError;
use crate::math::Real;
use crate::utils::SortedPair;

/// The friction coefficient of the model used when nothing else is registered.
pub const DEFAULT_MU: Real = 0.5;
/// The barrier stiffness of the model used when nothing else is registered (1 GPa).
pub const DEFAULT_KAPPA: Real = 1.0e9;

/// Error raised when registering a contact model.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum TabularError {
    /// The element was not created by this tabular.
    #[error("the contact element {0} is not registered in this tabular.")]
    UnknownElement(usize),
    /// The coefficients of the model are invalid.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// A handle to a contact element registered in a [`ContactTabular`].
///
/// Every geometry carries one contact element; the coefficient of a contact
/// between two geometries is looked up from their two elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactElement {
    id: usize,
}

impl ContactElement {
    /// The index of this element in its tabular.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
struct ElementEntry {
    name: String,
}

/// The table of contact coefficients between contact elements.
///
/// The tabular is an explicit value owned by the caller. It starts with a
/// default model (`mu = 0.5`, `kappa = 1 GPa`) and a default element of id 0.
///
/// Lookups resolve in this order:
/// 1. the model inserted for the exact pair of elements, if any;
/// 2. if either element has a model inserted with itself, the two
///    per-element models (or the default one for the element lacking it)
///    merged with the tabular's [`CombineRule`];
/// 3. the default model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactTabular {
    default_model: ContactCoefficient,
    rule: CombineRule,
    elements: Vec<ElementEntry>,
    models: BTreeMap<SortedPair<usize>, ContactCoefficient>,
}

impl Default for ContactTabular {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactTabular {
    /// Creates a tabular holding only the default model and the default element.
    pub fn new() -> Self {
        Self {
            default_model: ContactCoefficient::new_unchecked(DEFAULT_KAPPA, DEFAULT_MU),
            rule: CombineRule::default(),
            elements: vec![ElementEntry {
                name: String::from("default"),
            }],
            models: BTreeMap::new(),
        }
    }

    /// Sets the rule used to merge two per-element models.
    pub fn with_rule(mut self, rule: CombineRule) -> Self {
        self.rule = rule;
        self
    }

    /// The rule used to merge two per-element models.
    #[inline]
    pub fn rule(&self) -> CombineRule {
        self.rule
    }

    /// The element every geometry belongs to unless told otherwise.
    #[inline]
    pub fn default_element(&self) -> ContactElement {
        ContactElement { id: 0 }
    }

    /// Replaces the default model.
    ///
    /// Note the `(mu, kappa)` argument order.
    pub fn default_model(&mut self, mu: Real, kappa: Real) -> Result<(), ParameterError> {
        self.default_model = ContactCoefficient::new(kappa, mu)?;
        log::debug!("Default contact model set to mu = {}, kappa = {}.", mu, kappa);
        Ok(())
    }

    /// The current default model.
    #[inline]
    pub fn default_coefficient(&self) -> ContactCoefficient {
        self.default_model
    }

    /// Registers a new contact element.
    pub fn create(&mut self, name: impl Into<String>) -> ContactElement {
        let id = self.elements.len();
        let name = name.into();
        log::debug!("Created contact element {} ({:?}).", id, name);
        self.elements.push(ElementEntry { name });
        ContactElement { id }
    }

    /// The name given to `element` when it was created.
    pub fn name(&self, element: ContactElement) -> Option<&str> {
        self.elements.get(element.id).map(|e| e.name.as_str())
    }

    /// The number of registered elements, the default one included.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Sets the model used between `a` and `b`, in both orders.
    ///
    /// Inserting with `a == b` sets the per-element model of `a`. Note the
    /// `(mu, kappa)` argument order.
    ///
    /// Fails without modifying the tabular if either element was not created
    /// by this tabular or if the coefficients are invalid.
    pub fn insert(
        &mut self,
        a: ContactElement,
        b: ContactElement,
        mu: Real,
        kappa: Real,
    ) -> Result<(), TabularError> {
        for e in [a, b] {
            if !self.contains(e) {
                return Err(TabularError::UnknownElement(e.id));
            }
        }

        let coeff = ContactCoefficient::new(kappa, mu)?;

        if self
            .models
            .insert(SortedPair::new(a.id, b.id), coeff)
            .is_some()
        {
            log::debug!(
                "Overrode the contact model between elements {} and {}.",
                a.id,
                b.id
            );
        } else {
            log::debug!(
                "Inserted a contact model between elements {} and {}.",
                a.id,
                b.id
            );
        }

        Ok(())
    }

    /// Was `element` created by this tabular?
    #[inline]
    pub fn contains(&self, element: ContactElement) -> bool {
        element.id < self.elements.len()
    }

    /// The coefficient of a contact between geometries of elements `a` and `b`.
    ///
    /// Elements unknown to this tabular carry no model and resolve to the
    /// default one.
    pub fn coefficient(&self, a: ContactElement, b: ContactElement) -> ContactCoefficient {
        if let Some(coeff) = self.models.get(&SortedPair::new(a.id, b.id)) {
            return *coeff;
        }

        let self_a = self.models.get(&SortedPair::new(a.id, a.id));
        let self_b = self.models.get(&SortedPair::new(b.id, b.id));

        match (self_a, self_b) {
            (None, None) => self.default_model,
            (ca, cb) => self.combined(
                ca.unwrap_or(&self.default_model),
                cb.unwrap_or(&self.default_model),
            ),
        }
    }

    /// Merges two coefficients with this tabular's rule.
    #[inline]
    pub fn combined(&self, a: &ContactCoefficient, b: &ContactCoefficient) -> ContactCoefficient {
        a.combine(b, self.rule)
    }

    /// The full symmetric `n × n` table, row-major, `n` being the element count.
    pub fn to_dense(&self) -> Vec<ContactCoefficient> {
        let n = self.elements.len();
        let mut table = Vec::with_capacity(n * n);

        for i in 0..n {
            for j in 0..n {
                table.push(self.coefficient(ContactElement { id: i }, ContactElement { id: j }));
            }
        }

        table
    }
}
