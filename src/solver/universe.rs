use std::collections::HashMap;

use crate::{
    error::{Error, InvalidPuzzle, Result},
    solver::{
        knowledge::{KnowledgeBase, Pair},
        value::ValueToken,
    },
};

pub type ValueId = u32;
pub type PropertyId = usize;

/// The fixed universe of a puzzle: every property and every value, interned
/// to dense ids.
///
/// Properties partition the values: a token may appear in exactly one
/// property, and all properties must be the same size (one entity claims one
/// value from each). Both conditions are checked at construction.
#[derive(Debug, Clone)]
pub struct Universe<V: ValueToken> {
    tokens: Vec<V>,
    ids: HashMap<V, ValueId>,
    property_index: Vec<PropertyId>,
    properties: Vec<Vec<ValueId>>,
    pair_count: usize,
}

impl<V: ValueToken> Universe<V> {
    pub fn new(properties: Vec<Vec<V>>) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut ids = HashMap::new();
        let mut property_index = Vec::new();
        let mut members: Vec<Vec<ValueId>> = Vec::with_capacity(properties.len());

        for (property, values) in properties.into_iter().enumerate() {
            let mut ids_here = Vec::with_capacity(values.len());
            for token in values {
                if ids.contains_key(&token) {
                    return Err(InvalidPuzzle::DuplicateValue(format!("{token:?}")).into());
                }
                let id = tokens.len() as ValueId;
                ids.insert(token.clone(), id);
                tokens.push(token);
                property_index.push(property);
                ids_here.push(id);
            }
            members.push(ids_here);
        }

        if members.windows(2).any(|pair| pair[0].len() != pair[1].len()) {
            return Err(InvalidPuzzle::MismatchedProperties.into());
        }

        let mut pair_count = 0;
        for (index, left) in members.iter().enumerate() {
            for right in &members[index + 1..] {
                pair_count += left.len() * right.len();
            }
        }

        Ok(Self {
            tokens,
            ids,
            property_index,
            properties: members,
            pair_count,
        })
    }

    pub fn value_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn values_in(&self, property: PropertyId) -> &[ValueId] {
        &self.properties[property]
    }

    pub fn property_of(&self, value: ValueId) -> PropertyId {
        self.property_index[value as usize]
    }

    pub fn token(&self, value: ValueId) -> &V {
        &self.tokens[value as usize]
    }

    pub fn id(&self, token: &V) -> Result<ValueId> {
        self.ids
            .get(token)
            .copied()
            .ok_or_else(|| Error::from(InvalidPuzzle::UnknownValue(format!("{token:?}"))))
    }

    /// The canonical pair for two tokens, rejecting pairs within one property.
    pub fn pair(&self, a: &V, b: &V) -> Result<Pair> {
        let id_a = self.id(a)?;
        let id_b = self.id(b)?;
        if self.property_of(id_a) == self.property_of(id_b) {
            return Err(
                InvalidPuzzle::SamePropertyPair(format!("{a:?}"), format!("{b:?}")).into(),
            );
        }
        Ok(Pair::new(id_a, id_b))
    }

    /// How many cross-property pairs exist; the knowledge base is complete
    /// when it holds a truth for every one of them.
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Every cross-property pair, in enumeration order.
    pub fn all_pairs(&self) -> Vec<Pair> {
        let mut pairs = Vec::with_capacity(self.pair_count);
        for (index, left) in self.properties.iter().enumerate() {
            for right in &self.properties[index + 1..] {
                for &a in left {
                    for &b in right {
                        pairs.push(Pair::new(a, b));
                    }
                }
            }
        }
        pairs
    }

    /// The cross-property pairs the knowledge base holds no truth for yet.
    pub fn unknown_pairs(&self, kb: &KnowledgeBase) -> Vec<Pair> {
        self.all_pairs()
            .into_iter()
            .filter(|&pair| kb.truth(pair).is_none())
            .collect()
    }
}
