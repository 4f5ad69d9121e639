use std::{fmt, num::ParseIntError, str::FromStr, sync::Arc};
use crate::Lut;
use super::Builtin;

/// Numeric identifier of a palette.  Built-in palettes use the ids
/// given by [`Builtin::id`]; registered palettes get ids from
/// [`PaletteId::FIRST_USER_PALETTE`] on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaletteId(pub u32);

impl PaletteId {
    /// First id assigned to a registered palette (one past the last
    /// regular built-in).
    pub const FIRST_USER_PALETTE: PaletteId =
        PaletteId(Builtin::LAST_REGULAR as u32 + 1);
    /// Last id that may be assigned to a registered palette.
    pub const LAST_USER_PALETTE: PaletteId = PaletteId(64_990);

    /// Whether the id designates a built-in palette.
    pub fn is_builtin(self) -> bool { Builtin::from_id(self).is_some() }

    /// Whether the id lies in the range of registered palettes.
    pub fn is_user(self) -> bool {
        Self::FIRST_USER_PALETTE <= self && self <= Self::LAST_USER_PALETTE
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PaletteId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PaletteId)
    }
}

impl From<Builtin> for PaletteId {
    fn from(b: Builtin) -> Self { b.id() }
}

/// Reference to the LUT a renderer should use.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteRef {
    Builtin(Builtin),
    /// A palette added with
    /// [`PaletteRegistry::register`](crate::PaletteRegistry::register).
    User(PaletteId),
    /// A LUT supplied by the caller, not stored in any registry.
    Inline(Arc<Lut>),
}

impl PaletteRef {
    /// Reference for a numeric id: built-in if the id is one, user
    /// palette otherwise.
    pub fn from_id(id: PaletteId) -> Self {
        match Builtin::from_id(id) {
            Some(b) => PaletteRef::Builtin(b),
            None => PaletteRef::User(id),
        }
    }
}

impl From<Builtin> for PaletteRef {
    fn from(b: Builtin) -> Self { PaletteRef::Builtin(b) }
}

impl From<Lut> for PaletteRef {
    fn from(lut: Lut) -> Self { PaletteRef::Inline(Arc::new(lut)) }
}

/// A registered palette: its names and a shared handle to its LUT.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteEntry {
    pub id: PaletteId,
    /// Machine-readable name.
    pub name: String,
    /// Name for display.
    pub human_name: String,
    /// Legacy names also accepted by
    /// [`PaletteRegistry::find_id`](crate::PaletteRegistry::find_id).
    pub aliases: Vec<&'static str>,
    pub lut: Arc<Lut>,
}

impl PaletteEntry {
    /// Whether `name` is one of the aliases (ignoring ASCII case).
    pub(crate) fn has_alias(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_text() {
        assert_eq!(PaletteId(42).to_string(), "42");
        assert_eq!(" 17 ".parse::<PaletteId>(), Ok(PaletteId(17)));
        assert!("x".parse::<PaletteId>().is_err());
    }

    #[test]
    fn id_ranges() {
        assert!(Builtin::Gray.id().is_builtin());
        assert!(Builtin::Alpha.id().is_builtin());
        assert!(!Builtin::Alpha.id().is_user());
        assert!(PaletteId::FIRST_USER_PALETTE.is_user());
        assert!(!PaletteId::FIRST_USER_PALETTE.is_builtin());
        assert!(PaletteId::LAST_USER_PALETTE < Builtin::Alpha.id());
        assert_eq!(PaletteRef::from_id(Builtin::Matlab.id()),
                   PaletteRef::Builtin(Builtin::Matlab));
        assert_eq!(PaletteRef::from_id(PaletteId::FIRST_USER_PALETTE),
                   PaletteRef::User(PaletteId::FIRST_USER_PALETTE));
    }
}
