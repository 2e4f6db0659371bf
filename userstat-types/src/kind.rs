use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Upstream resource kinds that make up a user status.
///
/// These map one-to-one with upstream endpoints and allow consistent
/// Display formatting in errors and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// User identity (`id`, `name`).
    Identity,
    /// Account balance.
    Balance,
    /// Outstanding debts.
    Debts,
}

impl ResourceKind {
    /// Every kind, in dispatch order.
    pub const ALL: [Self; 3] = [Self::Identity, Self::Balance, Self::Debts];

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Balance => "balance",
            Self::Debts => "debts",
        }
    }

    /// Upstream path segment serving this kind (`/users/{id}` etc.).
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Identity => "users",
            Self::Balance => "balance",
            Self::Debts => "user-debts",
        }
    }

    /// The single-member set containing this kind.
    #[must_use]
    pub const fn flag(self) -> ResourceKinds {
        match self {
            Self::Identity => ResourceKinds::IDENTITY,
            Self::Balance => ResourceKinds::BALANCE,
            Self::Debts => ResourceKinds::DEBTS,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of [`ResourceKind`]s, used to report which fetches failed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ResourceKinds: u8 {
        /// Identity endpoint.
        const IDENTITY = 0b001;
        /// Balance endpoint.
        const BALANCE = 0b010;
        /// Debts endpoint.
        const DEBTS = 0b100;
    }
}

impl ResourceKinds {
    /// Returns true if `kind` is a member of the set.
    #[must_use]
    pub const fn has(self, kind: ResourceKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterate members in dispatch order.
    pub fn kinds(self) -> impl Iterator<Item = ResourceKind> {
        ResourceKind::ALL.into_iter().filter(move |k| self.has(*k))
    }
}

impl From<ResourceKind> for ResourceKinds {
    fn from(kind: ResourceKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<ResourceKind> for ResourceKinds {
    fn from_iter<I: IntoIterator<Item = ResourceKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, k| acc | k.flag())
    }
}

impl fmt::Display for ResourceKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kind in self.kinds() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(kind.as_str())?;
            first = false;
        }
        Ok(())
    }
}
