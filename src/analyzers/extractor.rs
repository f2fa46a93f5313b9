//! Scans a setup routine for the two scale-property assignments

use crate::model::{Expr, Stmt};

/// Property receiving the scale-mode tag.
pub const SCALE_MODE_PROPERTY: &str = "AutoScaleMode";

/// Property receiving the design-time scale dimensions.
pub const SCALE_DIMENSIONS_PROPERTY: &str = "AutoScaleDimensions";

/// Right-hand sides of the matched assignments, still opaque until
/// normalized. Either may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleAssignments<'a> {
    pub mode: Option<&'a Expr>,
    pub dimensions: Option<&'a Expr>,
}

/// Single linear scan over the routine's direct statement list.
///
/// Only expression statements whose expression is an assignment with a
/// member-access target are considered; nested blocks and lambdas are
/// never descended into. A later assignment to the same property
/// shadows an earlier one.
pub fn extract(statements: &[Stmt]) -> ScaleAssignments<'_> {
    let mut found = ScaleAssignments::default();

    for stmt in statements {
        let Stmt::Expr(Expr::Assign { target, value }) = stmt else {
            continue;
        };
        let Expr::Member { name, .. } = &**target else {
            continue;
        };

        match name.as_str() {
            SCALE_MODE_PROPERTY => found.mode = Some(&**value),
            SCALE_DIMENSIONS_PROPERTY => found.dimensions = Some(&**value),
            _ => {}
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;

    fn mode_stmt(tag: &str) -> Stmt {
        Stmt::Expr(Expr::assign(
            Expr::member(Expr::ident("this"), SCALE_MODE_PROPERTY),
            Expr::member(Expr::ident("AutoScaleMode"), tag),
        ))
    }

    fn dimensions_stmt(width: f32, height: f32) -> Stmt {
        Stmt::Expr(Expr::assign(
            Expr::member(Expr::ident("this"), SCALE_DIMENSIONS_PROPERTY),
            Expr::new_object(
                "SizeF",
                vec![
                    Expr::Lit(Literal::Float(width)),
                    Expr::Lit(Literal::Float(height)),
                ],
            ),
        ))
    }

    #[test]
    fn picks_up_both_assignments() {
        let statements = vec![
            Stmt::Other,
            dimensions_stmt(6.0, 12.0),
            mode_stmt("Font"),
            Stmt::Other,
        ];
        let found = extract(&statements);
        assert!(found.mode.is_some());
        assert!(found.dimensions.is_some());
    }

    #[test]
    fn last_assignment_wins() {
        let statements = vec![mode_stmt("Font"), mode_stmt("Dpi")];
        let found = extract(&statements);
        match found.mode {
            Some(Expr::Member { name, .. }) => assert_eq!(name, "Dpi"),
            other => panic!("unexpected mode expression: {other:?}"),
        }
    }

    #[test]
    fn ignores_assignments_to_other_properties() {
        let statements = vec![Stmt::Expr(Expr::assign(
            Expr::member(Expr::ident("this"), "ClientSize"),
            Expr::new_object("Size", Vec::new()),
        ))];
        let found = extract(&statements);
        assert!(found.mode.is_none());
        assert!(found.dimensions.is_none());
    }

    #[test]
    fn ignores_non_member_targets() {
        let statements = vec![Stmt::Expr(Expr::assign(
            Expr::ident("local"),
            Expr::member(Expr::ident("AutoScaleMode"), "Font"),
        ))];
        assert!(extract(&statements).mode.is_none());
    }

    #[test]
    fn empty_routine_yields_nothing() {
        let found = extract(&[]);
        assert!(found.mode.is_none());
        assert!(found.dimensions.is_none());
    }
}
