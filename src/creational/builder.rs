//! Builder: assemble a computer part by part, steered by a director.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub storage: Option<String>,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: &Option<String>| p.clone().unwrap_or_else(|| "none".to_string());
        write!(
            f,
            "Computer: Processor={}, Memory={}, Storage={}",
            part(&self.processor),
            part(&self.memory),
            part(&self.storage)
        )
    }
}

pub trait ComputerBuilder {
    fn build_processor(&mut self);
    fn build_memory(&mut self);
    fn build_storage(&mut self);
    fn computer(&self) -> &Computer;
    fn into_computer(self) -> Computer
    where
        Self: Sized;
}

#[derive(Debug, Default)]
pub struct BasicComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder for BasicComputerBuilder {
    fn build_processor(&mut self) {
        self.computer.processor = Some("Basic processor".to_string());
    }

    fn build_memory(&mut self) {
        self.computer.memory = Some("4 GB".to_string());
    }

    fn build_storage(&mut self) {
        self.computer.storage = Some("HDD 500 GB".to_string());
    }

    fn computer(&self) -> &Computer {
        &self.computer
    }

    fn into_computer(self) -> Computer {
        self.computer
    }
}

#[derive(Debug, Default)]
pub struct GamingComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder for GamingComputerBuilder {
    fn build_processor(&mut self) {
        self.computer.processor = Some("High-performance processor".to_string());
    }

    fn build_memory(&mut self) {
        self.computer.memory = Some("16 GB".to_string());
    }

    fn build_storage(&mut self) {
        self.computer.storage = Some("SSD 1 TB".to_string());
    }

    fn computer(&self) -> &Computer {
        &self.computer
    }

    fn into_computer(self) -> Computer {
        self.computer
    }
}

/// Knows the order of construction steps, not the parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn construct(&self, builder: &mut dyn ComputerBuilder) {
        builder.build_processor();
        builder.build_memory();
        builder.build_storage();
    }

    /// Run all steps and hand back the finished product.
    pub fn build<B: ComputerBuilder>(&self, mut builder: B) -> Computer {
        self.construct(&mut builder);
        builder.into_computer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_basic_builder_when_directed_then_builds_basic_computer() {
        let computer = Director.build(BasicComputerBuilder::default());
        assert_eq!(
            computer.to_string(),
            "Computer: Processor=Basic processor, Memory=4 GB, Storage=HDD 500 GB"
        );
    }

    #[test]
    fn given_partial_build_when_displaying_then_marks_missing_parts() {
        let mut builder = GamingComputerBuilder::default();
        builder.build_memory();
        assert_eq!(
            builder.computer().to_string(),
            "Computer: Processor=none, Memory=16 GB, Storage=none"
        );
    }
}
