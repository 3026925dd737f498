//! Bitflag decomposition helpers
//!
//! [`FlagsExt`] splits a combined [`bitflags`] value back into the
//! individual named flags it contains, in declaration order - handy for
//! rendering a permission set, emitting one log line per capability, or
//! mapping each flag to a follow-up action.
//!
//! ```rust
//! use bitflags::bitflags;
//! use omnitool_flags::FlagsExt;
//!
//! bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     struct Access: u8 {
//!         const READ = 0b001;
//!         const WRITE = 0b010;
//!         const EXEC = 0b100;
//!     }
//! }
//!
//! let granted = Access::READ | Access::EXEC;
//! assert_eq!(granted.decompose(), vec![Access::READ, Access::EXEC]);
//! ```
//!
//! The member table behind the decomposition is the compile-time constant
//! `Flags::FLAGS`, so repeated calls cost a single scan of a static slice.

use bitflags::Flags;

/// Extension trait for decomposing a flags value into its set members
///
/// Implemented blanket-style for every `Copy` [`bitflags::Flags`] type.
pub trait FlagsExt: Flags + Copy {
    /// Returns the named flags contained in this value, in declaration
    /// order
    ///
    /// A declared zero-valued flag (an explicit "none" member) is excluded;
    /// use [`decompose_with_empty`](FlagsExt::decompose_with_empty) to keep
    /// it. Composite members (flags declared as a union of others) are
    /// included whenever all of their bits are set.
    fn decompose(&self) -> Vec<Self> {
        decompose_flags(self, false)
    }

    /// Like [`decompose`](FlagsExt::decompose), but a declared zero-valued
    /// flag is always included
    fn decompose_with_empty(&self) -> Vec<Self> {
        decompose_flags(self, true)
    }
}

impl<F: Flags + Copy> FlagsExt for F {}

fn decompose_flags<F: Flags + Copy>(value: &F, include_empty: bool) -> Vec<F> {
    F::FLAGS
        .iter()
        .filter_map(|flag| {
            let member = *flag.value();
            if member.is_empty() {
                include_empty.then_some(member)
            } else {
                value.contains(member).then_some(member)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitflags::bitflags;

    bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Caps: u8 {
            const NONE = 0;
            const READ = 0b0001;
            const WRITE = 0b0010;
            const EXEC = 0b0100;
            const RW = Self::READ.bits() | Self::WRITE.bits();
        }
    }

    #[test]
    fn test_decompose_single_flag() {
        assert_eq!(Caps::READ.decompose(), vec![Caps::READ]);
    }

    #[test]
    fn test_decompose_combined_value() {
        let value = Caps::READ | Caps::EXEC;
        assert_eq!(value.decompose(), vec![Caps::READ, Caps::EXEC]);
    }

    #[test]
    fn test_decompose_includes_composite_members() {
        let value = Caps::READ | Caps::WRITE;
        assert_eq!(
            value.decompose(),
            vec![Caps::READ, Caps::WRITE, Caps::RW]
        );
    }

    #[test]
    fn test_decompose_excludes_empty_flag_by_default() {
        assert_eq!(Caps::empty().decompose(), vec![]);
        assert!(!Caps::READ.decompose().contains(&Caps::NONE));
    }

    #[test]
    fn test_decompose_with_empty_keeps_none_member() {
        assert_eq!(Caps::empty().decompose_with_empty(), vec![Caps::NONE]);
        assert_eq!(
            Caps::READ.decompose_with_empty(),
            vec![Caps::NONE, Caps::READ]
        );
    }
}
