//! Container classification by base-chain walk

use crate::model::{BaseRef, DeclaredType, TypeResolver};

/// Exact namespace path of the UI toolkit, rooted at the global
/// namespace.
const TOOLKIT_NAMESPACE: [&str; 3] = ["System", "Windows", "Forms"];

/// Simple names of the scalable container bases.
const CONTAINER_BASES: [&str; 2] = ["Form", "UserControl"];

/// Upper bound on the walk; cyclic or degenerate base metadata must
/// not hang the analysis.
const MAX_BASE_DEPTH: usize = 64;

/// Whether `ty` transitively derives from `System.Windows.Forms.Form`
/// or `System.Windows.Forms.UserControl`.
///
/// The walk climbs one base link at a time and stops at the object
/// root, at a missing or unresolvable link, or at the depth bound; all
/// three terminations classify the type as not a container.
pub fn is_scalable_container(ty: &DeclaredType, resolver: &dyn TypeResolver) -> bool {
    let mut link = &ty.base;

    for _ in 0..MAX_BASE_DEPTH {
        let qualified = match link {
            BaseRef::Named(name) => name,
            BaseRef::ObjectRoot | BaseRef::Missing => return false,
        };

        let base = match resolver.resolve(qualified) {
            Some(base) => base,
            None => return false,
        };

        if base.namespace.segments() == TOOLKIT_NAMESPACE
            && CONTAINER_BASES.contains(&base.name.as_str())
        {
            return true;
        }

        link = &base.base;
    }

    log::debug!("base chain of `{}` exceeded depth bound", ty.name);
    false
}
