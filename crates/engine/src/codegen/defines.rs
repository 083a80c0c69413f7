//! Core define generation.
//!
//! The define set is what the RTL build includes to parameterize the core:
//! one macro per configuration parameter, renamed to UPPER_SNAKE_CASE, plus
//! the frontend bus group. The bus group is not part of the generic pass:
//! exactly one family is selected and only that family's selector and width
//! macros are emitted. Generation is all-or-nothing: a name collision or an
//! unknown bus family aborts the whole encode with no partial result.

use std::fmt;

use tracing::debug;

use crate::codegen::literal::SvLiteral;
use crate::codegen::name::to_upper_snake;
use crate::common::error::ConfigError;
use crate::config::ResolvedConfig;

/// Frontend bus protocol family.
///
/// The core's register frontend exists in exactly two flavors; the selected
/// one is enabled with an `I3C_USE_<FAMILY>` macro and parameterized with
/// `<FAMILY>_ADDR_WIDTH` / `<FAMILY>_DATA_WIDTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusFamily {
    /// AMBA AHB frontend.
    Ahb,
    /// AMBA AXI frontend.
    Axi,
}

impl BusFamily {
    /// Parses the configuration-level family name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "AHB" => Ok(BusFamily::Ahb),
            "AXI" => Ok(BusFamily::Axi),
            other => Err(ConfigError::UnknownBusFamily(other.to_owned())),
        }
    }

    /// The macro-facing family name.
    pub fn as_str(self) -> &'static str {
        match self {
            BusFamily::Ahb => "AHB",
            BusFamily::Axi => "AXI",
        }
    }
}

impl fmt::Display for BusFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, name-unique collection of `(macro name, literal)` pairs.
///
/// Iteration order is generation order, so emitted headers are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreDefines {
    entries: Vec<(String, SvLiteral)>,
}

impl CoreDefines {
    /// Generates the full define set from a resolved configuration.
    ///
    /// The generic pass covers every resolved parameter except the frontend
    /// group (any logical name containing `Frontend`), which is handled by
    /// the dedicated bus rule afterwards.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateField`] if two rules produce the same macro
    /// name, [`ConfigError::UnknownBusFamily`] if the bus selector names
    /// neither AHB nor AXI. No partial result escapes.
    pub fn generate(cfg: &ResolvedConfig) -> Result<Self, ConfigError> {
        let mut defines = Self::default();

        for (name, value) in cfg.params() {
            // Frontend parametrization is performed by the bus rule below.
            if name.contains("Frontend") {
                continue;
            }
            defines.push(to_upper_snake(&name), SvLiteral::from(&value))?;
        }

        let family = BusFamily::parse(&cfg.frontend_bus_interface)?;
        debug!(%family, "emitting frontend bus define group");
        defines.push(format!("I3C_USE_{family}"), SvLiteral::Int(1))?;
        defines.push(
            format!("{family}_ADDR_WIDTH"),
            SvLiteral::Int(cfg.frontend_bus_addr_width),
        )?;
        defines.push(
            format!("{family}_DATA_WIDTH"),
            SvLiteral::Int(cfg.frontend_bus_data_width),
        )?;

        Ok(defines)
    }

    /// Appends an entry, rejecting duplicate macro names.
    fn push(&mut self, name: String, value: SvLiteral) -> Result<(), ConfigError> {
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(ConfigError::DuplicateField(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    /// Iterates entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SvLiteral)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Looks up a define by macro name.
    pub fn get(&self, name: &str) -> Option<&SvLiteral> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of defines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no defines were generated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
