use crate::model::Constraint;

/// `constraints ++ [x1 >= 0] ++ [x2 >= 0]`, skipping implied constraints the
/// caller already supplied (exact match). The input is left untouched.
pub fn with_non_negativity(constraints: &[Constraint]) -> Vec<Constraint> {
    let implied = [Constraint::X1_NON_NEGATIVE, Constraint::X2_NON_NEGATIVE];
    let mut out = Vec::with_capacity(constraints.len() + implied.len());
    out.extend_from_slice(constraints);
    out.extend(implied.into_iter().filter(|nn| !constraints.contains(nn)));
    out
}
