/// Addition, subtraction, multiplication and division.
pub mod scalar;

/// Exponentiation, including the negative-base domain check.
pub mod power;
