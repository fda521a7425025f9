//! Resource declarations: named, indexed signals mapped to package pins.

use crate::pins::{Attr, Pins};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `(name, index)` pair identifying a resource within a table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Logical signal name, e.g. `"clk100"`.
    pub name: String,
    /// Instance index, e.g. `0`.
    pub index: u32,
}

impl ResourceKey {
    /// Creates a new resource key.
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.index)
    }
}

/// A named member of a composite resource (e.g. `tx` of a serial port).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsignal {
    name: String,
    pins: Pins,
    attrs: Vec<Attr>,
}

impl Subsignal {
    /// Creates a sub-signal from a whitespace-separated pin-location string.
    pub fn new(name: impl Into<String>, pins: &str) -> Self {
        Self {
            name: name.into(),
            pins: Pins::new(pins),
            attrs: Vec::new(),
        }
    }

    /// Adds an electrical attribute specific to this sub-signal.
    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Returns the sub-signal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sub-signal pins.
    pub fn pins(&self) -> &Pins {
        &self.pins
    }

    /// Returns the attributes declared on this sub-signal only.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Returns the I/O standard declared on this sub-signal only.
    pub fn io_standard(&self) -> Option<&str> {
        first_io_standard(&self.attrs)
    }
}

/// The pin layout of a resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A single pin-location string.
    Simple(Pins),
    /// Named sub-signals, each with its own pins, in declaration order.
    Composite(Vec<Subsignal>),
}

/// A named, indexed logical signal and its package pins.
///
/// Attributes declared on the resource apply to every pin; for composite
/// resources they are shared by all sub-signals, and a sub-signal's own
/// I/O standard takes precedence over the shared one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resource {
    name: String,
    index: u32,
    kind: ResourceKind,
    attrs: Vec<Attr>,
    #[serde(skip)]
    fitted: bool,
    #[serde(skip)]
    misplaced: Option<String>,
}

impl Resource {
    /// Declares a simple resource on the given pin-location string.
    pub fn simple(name: impl Into<String>, index: u32, pins: &str) -> Self {
        Self {
            name: name.into(),
            index,
            kind: ResourceKind::Simple(Pins::new(pins)),
            attrs: Vec::new(),
            fitted: true,
            misplaced: None,
        }
    }

    /// Declares a composite resource; add members with [`subsignal`](Self::subsignal).
    pub fn composite(name: impl Into<String>, index: u32) -> Self {
        Self {
            name: name.into(),
            index,
            kind: ResourceKind::Composite(Vec::new()),
            attrs: Vec::new(),
            fitted: true,
            misplaced: None,
        }
    }

    /// Appends a sub-signal.
    ///
    /// A simple resource has no sub-signals; the first one given is recorded
    /// and the resource is rejected when a table is built from it.
    pub fn subsignal(mut self, subsignal: Subsignal) -> Self {
        match &mut self.kind {
            ResourceKind::Composite(subsignals) => subsignals.push(subsignal),
            ResourceKind::Simple(_) => {
                self.misplaced.get_or_insert(subsignal.name);
            }
        }
        self
    }

    /// Adds an attribute shared by every pin of the resource.
    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Marks the resource as declared but not fitted on this board.
    ///
    /// Not-fitted resources are dropped when the table is built and can never
    /// be looked up.
    pub fn not_fitted(mut self) -> Self {
        self.fitted = false;
        self
    }

    /// Returns whether the resource is fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Returns the name of a sub-signal given to a simple resource, if any.
    pub fn misplaced_subsignal(&self) -> Option<&str> {
        self.misplaced.as_deref()
    }

    /// Returns the `(name, index)` key of this resource.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(self.name.clone(), self.index)
    }

    /// Returns the logical signal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instance index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the pin layout.
    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// Returns the attributes shared by every pin of the resource.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Returns `true` for composite resources.
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, ResourceKind::Composite(_))
    }

    /// Returns the pins of a simple resource.
    pub fn pins(&self) -> Option<&Pins> {
        match &self.kind {
            ResourceKind::Simple(pins) => Some(pins),
            ResourceKind::Composite(_) => None,
        }
    }

    /// Returns the sub-signals of a composite resource, empty for simple ones.
    pub fn subsignals(&self) -> &[Subsignal] {
        match &self.kind {
            ResourceKind::Simple(_) => &[],
            ResourceKind::Composite(subsignals) => subsignals,
        }
    }

    /// Returns the sub-signal with the given name.
    pub fn get_subsignal(&self, name: &str) -> Option<&Subsignal> {
        self.subsignals().iter().find(|s| s.name == name)
    }

    /// Returns the total number of pins across all sub-signals.
    pub fn width(&self) -> usize {
        match &self.kind {
            ResourceKind::Simple(pins) => pins.width(),
            ResourceKind::Composite(subsignals) => {
                subsignals.iter().map(|s| s.pins.width()).sum()
            }
        }
    }

    /// Returns the shared I/O standard of the resource.
    pub fn io_standard(&self) -> Option<&str> {
        first_io_standard(&self.attrs)
    }

    /// Returns the I/O standard in effect for a sub-signal: its own, or else
    /// the shared one.
    pub fn effective_io_standard<'a>(&'a self, subsignal: &'a Subsignal) -> Option<&'a str> {
        subsignal.io_standard().or_else(|| self.io_standard())
    }

    /// Flattens the resource into one assignment per package pin, in
    /// declaration and bit order.
    pub fn pin_assignments(&self) -> Vec<PinAssignment> {
        let key = self.key();
        let shared_misc = misc_directives(&self.attrs);
        match &self.kind {
            ResourceKind::Simple(pins) => expand(
                &key,
                None,
                pins,
                self.io_standard(),
                shared_misc,
            ),
            ResourceKind::Composite(subsignals) => subsignals
                .iter()
                .flat_map(|sub| {
                    let mut misc = shared_misc.clone();
                    misc.extend(misc_directives(&sub.attrs));
                    expand(
                        &key,
                        Some(sub.name.as_str()),
                        &sub.pins,
                        self.effective_io_standard(sub),
                        misc,
                    )
                })
                .collect(),
        }
    }
}

/// One package pin with everything a constraint writer needs to emit it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PinAssignment {
    /// The owning resource.
    pub resource: ResourceKey,
    /// The sub-signal name, for composite resources.
    pub subsignal: Option<String>,
    /// The bit position, for signals wider than one pin.
    pub bit: Option<usize>,
    /// The package pin identifier.
    pub pin: String,
    /// The I/O standard in effect, if any.
    pub io_standard: Option<String>,
    /// Verbatim toolchain directives in effect.
    pub misc: Vec<String>,
}

impl PinAssignment {
    /// Returns a readable path such as `eth:0.rx_data[3]` or `clk100:0`.
    pub fn path(&self) -> String {
        let mut path = self.resource.to_string();
        if let Some(sub) = &self.subsignal {
            path.push('.');
            path.push_str(sub);
        }
        if let Some(bit) = self.bit {
            path.push_str(&format!("[{bit}]"));
        }
        path
    }
}

fn first_io_standard(attrs: &[Attr]) -> Option<&str> {
    attrs.iter().find_map(Attr::as_io_standard)
}

fn misc_directives(attrs: &[Attr]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|a| match a {
            Attr::Misc(s) => Some(s.clone()),
            Attr::IoStandard(_) => None,
        })
        .collect()
}

fn expand(
    key: &ResourceKey,
    subsignal: Option<&str>,
    pins: &Pins,
    io_standard: Option<&str>,
    misc: Vec<String>,
) -> Vec<PinAssignment> {
    let is_bus = pins.width() > 1;
    pins.iter()
        .enumerate()
        .map(|(bit, pin)| PinAssignment {
            resource: key.clone(),
            subsignal: subsignal.map(str::to_string),
            bit: is_bus.then_some(bit),
            pin: pin.to_string(),
            io_standard: io_standard.map(str::to_string),
            misc: misc.clone(),
        })
        .collect()
}
