//! Bridge: shapes and colors vary independently.

pub trait Color {
    fn fill(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Red;

impl Color for Red {
    fn fill(&self) -> &'static str {
        "red"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Green;

impl Color for Green {
    fn fill(&self) -> &'static str {
        "green"
    }
}

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    color: Box<dyn Color>,
}

impl Circle {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        format!("draws a circle colored {}", self.color.fill())
    }
}

pub struct Square {
    color: Box<dyn Color>,
}

impl Square {
    pub fn new(color: Box<dyn Color>) -> Self {
        Self { color }
    }
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("draws a square colored {}", self.color.fill())
    }
}
