use crate::base::t2_new;
use crate::StrError;
use russell_tensor::Tensor2;
use std::collections::HashMap;

/// Holds the current, old, and older values of a tensor property at all integration points of an element
#[derive(Clone, Debug)]
pub struct TensorHistory {
    /// Values at the current (trial) state
    pub current: Vec<Tensor2>,

    /// Values at the previous converged step
    pub old: Vec<Tensor2>,

    /// Values at the step before the previous converged step
    pub older: Vec<Tensor2>,
}

/// Holds read-only snapshots of the stress history at all integration points
#[derive(Clone, Copy, Debug)]
pub struct StressHistory<'a> {
    /// Stresses at the current (trial) state
    pub current: &'a [Tensor2],

    /// Stresses at the previous converged step
    pub old: &'a [Tensor2],

    /// Stresses at the step before the previous converged step
    pub older: &'a [Tensor2],
}

/// Holds the named tensor properties of an element (e.g., "stress")
pub struct PropertyStorage {
    n_point: usize,
    properties: HashMap<String, TensorHistory>,
}

impl TensorHistory {
    /// Allocates a new instance with zero tensors
    pub fn new(n_point: usize) -> Self {
        TensorHistory {
            current: (0..n_point).map(|_| t2_new()).collect(),
            old: (0..n_point).map(|_| t2_new()).collect(),
            older: (0..n_point).map(|_| t2_new()).collect(),
        }
    }

    /// Shifts the history: older ← old and old ← current
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.older, &mut self.old);
        self.old.clone_from(&self.current);
    }

    /// Returns the read-only snapshots
    pub fn snapshots(&self) -> StressHistory {
        StressHistory {
            current: &self.current,
            old: &self.old,
            older: &self.older,
        }
    }
}

impl PropertyStorage {
    /// Allocates a new instance
    pub fn new(n_point: usize) -> Self {
        PropertyStorage {
            n_point,
            properties: HashMap::new(),
        }
    }

    /// Declares a new property with zero initial values
    pub fn declare(&mut self, name: &str) -> Result<(), StrError> {
        if self.properties.contains_key(name) {
            return Err("property has been declared already");
        }
        self.properties.insert(name.to_string(), TensorHistory::new(self.n_point));
        Ok(())
    }

    /// Returns the history of a property
    pub fn history(&self, name: &str) -> Result<&TensorHistory, StrError> {
        self.properties.get(name).ok_or("cannot find property in the storage")
    }

    /// Returns an access to the current values of a property
    pub fn current_mut(&mut self, name: &str) -> Result<&mut Vec<Tensor2>, StrError> {
        match self.properties.get_mut(name) {
            Some(h) => Ok(&mut h.current),
            None => Err("cannot find property in the storage"),
        }
    }

    /// Shifts the history of all properties after a converged step
    pub fn commit_step(&mut self) {
        for history in self.properties.values_mut() {
            history.commit();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
