//! Distinct-name tally for qualifying devices
//!
//! The Meraki clients listing repeats a device on every page it shows up on,
//! so the tally is a set keyed by the reported name. Two physical devices that
//! report the same name count once.

use std::collections::HashSet;

/// Anything that reports a display name the tally can key on
pub(crate) trait DeviceName {
    fn device_name(&self) -> Option<&str>;
}

#[derive(Debug)]
pub(crate) struct DeviceTally {
    prefix: String,
    names: HashSet<String>,
}

impl DeviceTally {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            names: HashSet::new(),
        }
    }

    pub(crate) fn qualifies(&self, name: &str) -> bool {
        name.starts_with(&self.prefix)
    }

    /// Record a name. Returns true only for a qualifying name not seen before.
    pub(crate) fn insert(&mut self, name: &str) -> bool {
        if !self.qualifies(name) || self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub(crate) fn extend<'a, I, T>(&mut self, devices: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: DeviceName + 'a,
    {
        devices
            .into_iter()
            .filter_map(DeviceName::device_name)
            .filter(|name| self.insert(name))
            .count()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
