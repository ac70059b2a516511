/// Defines the builtin functions by generating the [`Function`] enum together
/// with its name lookup and the public list of builtin names.
///
/// Each entry provides the variant and the word that spells it in source
/// text. Glyph spellings such as `√` are handled by the lexer.
macro_rules! builtin_functions {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal
        ),* $(,)?
    ) => {
        /// A builtin single-argument function.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        /// Names of all builtin functions, as spelled in source text.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[$($name,)*];

        impl Function {
            /// Returns the canonical spelling of the function.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Looks up a function by its spelled-out name.
            ///
            /// ## Example
            /// ```
            /// use graphcalc::ast::Function;
            ///
            /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
            /// assert_eq!(Function::from_name("log"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

builtin_functions! {
    /// Sine, honoring the angle mode.
    Sin => "sin",
    /// Cosine, honoring the angle mode.
    Cos => "cos",
    /// Tangent, honoring the angle mode.
    Tan => "tan",
    /// Natural logarithm.
    Ln => "ln",
    /// Square root.
    Sqrt => "sqrt",
}

impl Function {
    /// Whether the argument is an angle and therefore subject to the angle
    /// mode.
    #[must_use]
    pub const fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }
}

/// A named mathematical constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `π`, also spelled `pi`.
    Pi,
}

impl Constant {
    /// Returns the double-precision value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
        }
    }

    /// Returns the ASCII spelling of the constant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`, `−`)
    Sub,
    /// Multiplication (`*`, `×`, or implicit)
    Mul,
    /// Division (`/`, `÷`)
    Div,
    /// Exponentiation (`^`, or the `²` suffix)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant records the zero-based character position of the source text
/// it was built from, used for error reporting. Trees are built fresh by every
/// parse and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Position in the source text.
        position: usize,
    },
    /// A named constant such as `π`.
    Constant {
        /// Which constant.
        constant: Constant,
        /// Position in the source text.
        position: usize,
    },
    /// Reference to a free variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Position in the source text.
        position: usize,
    },
    /// Arithmetic negation.
    Negate {
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the minus sign.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator, or of the right operand for implicit
        /// operators.
        position: usize,
    },
    /// Function application (e.g. `sin(x)`).
    FunctionCall {
        /// The function being applied.
        function: Function,
        /// The single argument.
        argument: Box<Self>,
        /// Position of the function name.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use graphcalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Constant { position, .. }
            | Self::Variable { position, .. }
            | Self::Negate { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }

    /// Builds `base ^ 2`, the meaning of the `²` suffix.
    #[must_use]
    pub fn squared(self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(self),
                         op: BinaryOperator::Pow,
                         right: Box::new(Self::Literal { value: 2.0,
                                                         position }),
                         position }
    }
}

/// Renders the canonical, fully parenthesized ASCII form of the tree.
///
/// The rendering parses back to an equivalent tree.
///
/// ## Example
/// ```
/// use graphcalc::parse;
///
/// let tree = parse("2x² + √π").unwrap();
/// assert_eq!(tree.to_string(), "((2 * (x ^ 2)) + sqrt(pi))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Constant { constant, .. } => write!(f, "{}", constant.name()),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Negate { expr, .. } => write!(f, "(-{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function, argument, .. } => {
                write!(f, "{}({argument})", function.name())
            },
        }
    }
}
