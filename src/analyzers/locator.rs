//! Locates the generated setup routine(s) of a container type

use crate::core::SourceLocation;
use crate::model::{DeclaredType, Stmt};

/// Well-known name of the designer-generated setup method.
pub const SETUP_METHOD_NAME: &str = "InitializeComponent";

/// A bodied setup-routine declaration. A partial class split across
/// files can contribute several; each is analyzed independently.
#[derive(Debug, Clone, Copy)]
pub struct InitializerRoutine<'a> {
    pub statements: &'a [Stmt],
    pub location: &'a SourceLocation,
}

/// All bodied `InitializeComponent` members of `ty`, in declaration
/// order. Bodiless declarations are skipped; a type without any is
/// simply not applicable.
pub fn locate(ty: &DeclaredType) -> Vec<InitializerRoutine<'_>> {
    ty.members
        .iter()
        .filter(|member| member.name == SETUP_METHOD_NAME)
        .filter_map(|member| {
            member.body.as_deref().map(|statements| InitializerRoutine {
                statements,
                location: &member.location,
            })
        })
        .collect()
}
