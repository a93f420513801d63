//! Solver-agnostic linear model.
//!
//! The scheduling rules are written against this small model (add a variable,
//! add a linear constraint, set the objective). A [`MilpBackend`] translates it
//! into whatever the underlying MILP library expects, so constraint
//! construction never touches solver types.
//!
//! [`MilpBackend`]: crate::backend::MilpBackend

use std::fmt;

/// Handle to a variable of a [`LinearModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in [`LinearModel::variables`] and in solved value vectors.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Domain of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// 0 or 1.
    Binary,
    /// Whole numbers within the bounds.
    Integer,
    /// Real numbers within the bounds.
    Continuous,
}

/// Definition of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDef {
    pub name: String,
    pub kind: VarKind,
    pub lower: f64,
    /// Upper bound; `None` means unbounded above.
    pub upper: Option<f64>,
}

/// `Σ coefficient·variable + constant`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add_term`](Self::add_term).
    pub fn term(mut self, var: VarId, coefficient: f64) -> Self {
        self.add_term(var, coefficient);
        self
    }

    /// Sum of the given variables, each with coefficient 1.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        let mut expr = Self::new();
        for var in vars {
            expr.add_term(var, 1.0);
        }
        expr
    }

    /// Adds `coefficient·var`. Zero coefficients are dropped.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        if coefficient != 0.0 {
            self.terms.push((var, coefficient));
        }
    }

    pub fn add_constant(&mut self, value: f64) {
        self.constant += value;
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the expression against a full value vector.
    pub fn eval(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coefficient)| coefficient * values[var.index()])
            .sum::<f64>()
            + self.constant
    }
}

impl From<VarId> for LinearExpr {
    fn from(var: VarId) -> Self {
        LinearExpr::new().term(var, 1.0)
    }
}

/// Relation between a constraint's expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    Le,
    Ge,
    Eq,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sense::Le => "<=",
            Sense::Ge => ">=",
            Sense::Eq => "==",
        })
    }
}

/// `expr (<=|>=|==) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub sense: Sense,
    pub rhs: f64,
}

impl Constraint {
    /// Returns true when the constraint holds within `tolerance`.
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.expr.eval(values);
        match self.sense {
            Sense::Le => lhs <= self.rhs + tolerance,
            Sense::Ge => lhs >= self.rhs - tolerance,
            Sense::Eq => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// A minimization MILP.
///
/// # Example
///
/// ```
/// use shiftforge_solver::linear::{LinearExpr, LinearModel, Sense};
///
/// let mut model = LinearModel::new("toy");
/// let a = model.add_binary("a");
/// let b = model.add_binary("b");
/// model.add_constraint("pick_one", LinearExpr::sum([a, b]), Sense::Ge, 1.0);
/// model.set_objective(LinearExpr::new().term(a, 3.0).term(b, 2.0));
///
/// assert_eq!(model.num_variables(), 2);
/// assert!(model.first_violation(&[0.0, 1.0], 1e-6).is_none());
/// assert!(model.first_violation(&[0.0, 0.0], 1e-6).is_some());
/// assert_eq!(model.objective().eval(&[0.0, 1.0]), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    name: String,
    variables: Vec<VarDef>,
    constraints: Vec<Constraint>,
    objective: LinearExpr,
}

impl LinearModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_variable(&mut self, def: VarDef) -> VarId {
        self.variables.push(def);
        VarId(self.variables.len() - 1)
    }

    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        self.add_variable(VarDef {
            name: name.into(),
            kind: VarKind::Binary,
            lower: 0.0,
            upper: Some(1.0),
        })
    }

    pub fn add_integer(&mut self, name: impl Into<String>, lower: f64, upper: Option<f64>) -> VarId {
        self.add_variable(VarDef {
            name: name.into(),
            kind: VarKind::Integer,
            lower,
            upper,
        })
    }

    pub fn add_continuous(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: Option<f64>,
    ) -> VarId {
        self.add_variable(VarDef {
            name: name.into(),
            kind: VarKind::Continuous,
            lower,
            upper,
        })
    }

    /// Adds `expr sense rhs`. The expression's constant is moved to the right-hand side.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        mut expr: LinearExpr,
        sense: Sense,
        rhs: f64,
    ) -> usize {
        let rhs = rhs - expr.constant;
        expr.constant = 0.0;
        self.constraints.push(Constraint {
            name: name.into(),
            expr,
            sense,
            rhs,
        });
        self.constraints.len() - 1
    }

    /// Sets the expression to minimize.
    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    pub fn variables(&self) -> &[VarDef] {
        &self.variables
    }

    pub fn variable(&self, var: VarId) -> &VarDef {
        &self.variables[var.index()]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of binary or integer variables.
    pub fn num_integer_variables(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.kind != VarKind::Continuous)
            .count()
    }

    /// Describes the first bound, integrality or constraint violation of
    /// `values`, or returns `None` when the point is feasible.
    pub fn first_violation(&self, values: &[f64], tolerance: f64) -> Option<String> {
        if values.len() != self.variables.len() {
            return Some(format!(
                "expected {} values, got {}",
                self.variables.len(),
                values.len()
            ));
        }

        for (def, &value) in self.variables.iter().zip(values) {
            if !value.is_finite() {
                return Some(format!("{} is not finite", def.name));
            }
            if value < def.lower - tolerance || def.upper.is_some_and(|u| value > u + tolerance) {
                return Some(format!("{} = {value} is out of bounds", def.name));
            }
            if def.kind != VarKind::Continuous && (value - value.round()).abs() > tolerance {
                return Some(format!("{} = {value} is not integral", def.name));
            }
        }

        self.constraints
            .iter()
            .find(|c| !c.is_satisfied(values, tolerance))
            .map(|c| {
                format!(
                    "{}: {} {} {} violated",
                    c.name,
                    c.expr.eval(values),
                    c.sense,
                    c.rhs
                )
            })
    }
}
