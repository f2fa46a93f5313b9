//! Normalizes raw right-hand sides into canonical scale values
//!
//! Every shape that is not exactly what the designer generates maps to
//! "absent"; nothing here is an error and no defaults are substituted.

use crate::core::{ScaleDimensions, ScaleMode};
use crate::model::{Expr, Literal};

/// The mode tag is the simple name of a member access
/// (`AutoScaleMode.Font`). Unrecognized tags and other expression
/// shapes are absent.
pub fn normalize_mode(expr: &Expr) -> Option<ScaleMode> {
    match expr {
        Expr::Member { name, .. } => ScaleMode::recognize(name),
        _ => None,
    }
}

/// Dimensions come only from a two-argument construction whose
/// arguments are both numeric literals, both non-negative. Partial or
/// malformed constructions never produce a value.
pub fn normalize_dimensions(expr: &Expr) -> Option<ScaleDimensions> {
    let Expr::New { args, .. } = expr else {
        return None;
    };
    let [first, second] = args.as_slice() else {
        return None;
    };
    let (Expr::Lit(first), Expr::Lit(second)) = (first, second) else {
        return None;
    };

    let width = numeric_value(first)?;
    let height = numeric_value(second)?;

    (width >= 0.0 && height >= 0.0).then_some(ScaleDimensions::new(width, height))
}

/// Per-kind conversion to the common representation; non-numeric
/// literal kinds are rejected outright.
fn numeric_value(literal: &Literal) -> Option<f32> {
    match literal {
        Literal::Int(value) => Some(*value as f32),
        Literal::Float(value) => Some(*value),
        Literal::Double(value) => Some(*value as f32),
        Literal::Str(_) | Literal::Bool(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn construction(args: Vec<Expr>) -> Expr {
        Expr::new_object("SizeF", args)
    }

    #[test]
    fn mode_from_member_access() {
        let expr = Expr::member(Expr::ident("AutoScaleMode"), "Font");
        assert_eq!(normalize_mode(&expr), Some(ScaleMode::Font));
    }

    #[test]
    fn unrecognized_mode_tag_is_absent() {
        let expr = Expr::member(Expr::ident("AutoScaleMode"), "Inherit");
        assert_eq!(normalize_mode(&expr), None);
    }

    #[test]
    fn mode_from_non_member_shape_is_absent() {
        assert_eq!(normalize_mode(&Expr::ident("Font")), None);
        assert_eq!(normalize_mode(&Expr::Opaque), None);
    }

    #[test]
    fn dimensions_from_float_literals() {
        let expr = construction(vec![
            Expr::Lit(Literal::Float(6.0)),
            Expr::Lit(Literal::Float(12.0)),
        ]);
        assert_eq!(normalize_dimensions(&expr), Some(ScaleDimensions::new(6.0, 12.0)));
    }

    #[test]
    fn dimensions_coerce_int_and_double_kinds() {
        let expr = construction(vec![
            Expr::Lit(Literal::Int(96)),
            Expr::Lit(Literal::Double(96.0)),
        ]);
        assert_eq!(normalize_dimensions(&expr), Some(ScaleDimensions::new(96.0, 96.0)));
    }

    #[test]
    fn wrong_argument_count_is_absent() {
        assert_eq!(normalize_dimensions(&construction(vec![])), None);
        assert_eq!(
            normalize_dimensions(&construction(vec![Expr::Lit(Literal::Float(6.0))])),
            None
        );
        assert_eq!(
            normalize_dimensions(&construction(vec![
                Expr::Lit(Literal::Float(6.0)),
                Expr::Lit(Literal::Float(12.0)),
                Expr::Lit(Literal::Float(1.0)),
            ])),
            None
        );
    }

    #[test]
    fn non_literal_arguments_are_absent() {
        let expr = construction(vec![Expr::ident("width"), Expr::Lit(Literal::Float(12.0))]);
        assert_eq!(normalize_dimensions(&expr), None);
    }

    #[test]
    fn non_numeric_literals_are_absent() {
        let expr = construction(vec![
            Expr::Lit(Literal::Str("6".into())),
            Expr::Lit(Literal::Float(12.0)),
        ]);
        assert_eq!(normalize_dimensions(&expr), None);
    }

    #[test]
    fn negative_values_are_rejected() {
        let expr = construction(vec![
            Expr::Lit(Literal::Int(-1)),
            Expr::Lit(Literal::Float(12.0)),
        ]);
        assert_eq!(normalize_dimensions(&expr), None);
    }

    #[test]
    fn non_construction_shapes_are_absent() {
        assert_eq!(normalize_dimensions(&Expr::ident("dims")), None);
        assert_eq!(normalize_dimensions(&Expr::Opaque), None);
    }
}
