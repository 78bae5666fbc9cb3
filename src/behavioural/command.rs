//! Command: calculator operations as queued, replayable objects.

use std::fmt;

use tracing::{instrument, trace};

/// Receiver of all commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, operand: f64) {
        self.value += operand;
    }

    pub fn subtract(&mut self, operand: f64) {
        self.value -= operand;
    }

    pub fn multiply(&mut self, operand: f64) {
        self.value *= operand;
    }

    /// Division by zero leaves the value untouched.
    pub fn divide(&mut self, operand: f64) {
        if operand != 0.0 {
            self.value /= operand;
        }
    }
}

pub trait Command: fmt::Debug {
    fn execute(&self, calculator: &mut Calculator);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorCommand {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
}

impl Command for CalculatorCommand {
    fn execute(&self, calculator: &mut Calculator) {
        match *self {
            CalculatorCommand::Add(v) => calculator.add(v),
            CalculatorCommand::Subtract(v) => calculator.subtract(v),
            CalculatorCommand::Multiply(v) => calculator.multiply(v),
            CalculatorCommand::Divide(v) => calculator.divide(v),
        }
    }
}

impl fmt::Display for CalculatorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorCommand::Add(v) => write!(f, "+ {v}"),
            CalculatorCommand::Subtract(v) => write!(f, "- {v}"),
            CalculatorCommand::Multiply(v) => write!(f, "* {v}"),
            CalculatorCommand::Divide(v) => write!(f, "/ {v}"),
        }
    }
}

/// Invoker: queues commands and runs them in insertion order.
#[derive(Debug, Default)]
pub struct CalculatorInvoker {
    commands: Vec<Box<dyn Command>>,
}

impl CalculatorInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: impl Command + 'static) -> &mut Self {
        self.commands.push(Box::new(command));
        self
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[instrument(level = "debug", skip_all, fields(commands = self.commands.len()))]
    pub fn execute_all(&self, calculator: &mut Calculator) {
        for command in &self.commands {
            command.execute(calculator);
            trace!(?command, value = calculator.value(), "executed");
        }
    }
}
