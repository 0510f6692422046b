//! Basic arithmetic calculator
//!
//! Two numbers, one of `+ - * /`, one result. Division by zero is reported as
//! an error value instead of a printed side effect.

use std::fmt;
use std::str::FromStr;

use crate::console::{confirm, prompt_number, Console, Screen};
use crate::errors::{Result, ToolError};

/// Supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply the operation to two operands
    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" | "x" | "×" => Ok(Operation::Multiply),
            "/" | "÷" => Ok(Operation::Divide),
            other => Err(ToolError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(ToolError::DivisionByZero);
    }
    Ok(a / b)
}

/// Parse `op` and apply it to `a` and `b`
pub fn calculate(a: f64, op: &str, b: f64) -> Result<f64> {
    op.parse::<Operation>()?.apply(a, b)
}

/// Text shown for a finished calculation
pub fn describe(result: &Result<f64>) -> String {
    match result {
        Ok(value) => format!("Result: {}", value),
        Err(ToolError::DivisionByZero) => "Error: Cannot divide by 0".to_string(),
        Err(ToolError::InvalidOperation(_)) => "Result: Invalid Operation!".to_string(),
        Err(other) => format!("Error: {}", other),
    }
}

/// Interactive calculator session
pub fn run(console: &mut dyn Console) -> Result<()> {
    console.banner("Welcome to the Basic CLI Calculator");

    loop {
        let a: f64 = prompt_number(console, "Enter the first number: ", "Please enter a valid number!")?;
        let b: f64 = prompt_number(console, "Enter the second number: ", "Please enter a valid number!")?;
        let op = console.read_line("Enter operation (+, -, *, /): ")?;

        let result = calculate(a, &op, b);
        match &result {
            Ok(value) => {
                tracing::debug!(a, b, op = op.trim(), value, "calculated");
                console.success(&describe(&result));
            }
            Err(err) => {
                tracing::debug!(a, b, op = op.trim(), %err, "calculation rejected");
                console.error(&describe(&result));
            }
        }

        if !confirm(console, "\nCalculate again? (yes/no): ")? {
            console.say("\nThank you for using the calculator!");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(2.5, 4.0), 10.0);
        assert_eq!(divide(9.0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(1.0, 0.0), Err(ToolError::DivisionByZero)));
        assert!(matches!(divide(1.0, -0.0), Err(ToolError::DivisionByZero)));
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("+".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" - ".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("x".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!("/".parse::<Operation>().unwrap(), Operation::Divide);
        assert!(matches!(
            "%".parse::<Operation>(),
            Err(ToolError::InvalidOperation(op)) if op == "%"
        ));
    }

    #[test]
    fn test_calculate() {
        assert_eq!(calculate(6.0, "*", 7.0).unwrap(), 42.0);
        assert!(calculate(6.0, "^", 7.0).is_err());
        assert!(calculate(6.0, "/", 0.0).is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Ok(7.5)), "Result: 7.5");
        assert_eq!(describe(&Ok(8.0)), "Result: 8");
        assert_eq!(describe(&Err(ToolError::DivisionByZero)), "Error: Cannot divide by 0");
        assert_eq!(
            describe(&Err(ToolError::InvalidOperation("%".into()))),
            "Result: Invalid Operation!"
        );
    }

    #[test]
    fn test_session_with_retry_and_repeat() {
        let mut console = ScriptedConsole::new([
            "four", "4", "2", "/", "y",
            "1", "0", "/", "yes",
            "1", "1", "?", "no",
        ]);
        run(&mut console).unwrap();

        assert!(console.contains("Please enter a valid number!"));
        assert!(console.contains("Result: 2"));
        assert!(console.contains("Error: Cannot divide by 0"));
        assert!(console.contains("Result: Invalid Operation!"));
        assert!(console.contains("Thank you for using the calculator!"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_session_end_of_input() {
        let mut console = ScriptedConsole::new(["1"]);
        assert!(matches!(run(&mut console), Err(ToolError::EndOfInput)));
    }
}
