//! Facade: one entry point over the power, OS and service subsystems.

use tracing::debug;

/// Tracks whether the machine currently has power.
#[derive(Debug, Clone, Default)]
pub struct PowerMonitor {
    on: bool,
}

impl PowerMonitor {
    pub fn is_on(&self) -> bool {
        self.on
    }

    fn set(&mut self, on: bool) {
        self.on = on;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsLoader;

impl OsLoader {
    pub fn load(&self) -> String {
        "Loading the operating system.".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceStopper;

impl ServiceStopper {
    pub fn stop(&self) -> String {
        "Stopping services before shutdown.".to_string()
    }
}

/// Simplified interface to the subsystems. Each call returns the steps taken.
#[derive(Debug, Clone, Default)]
pub struct ComputerFacade {
    power: PowerMonitor,
    loader: OsLoader,
    services: ServiceStopper,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    pub fn power_on(&mut self) -> Vec<String> {
        let mut steps = vec!["Checking whether power is on.".to_string()];
        if self.power.is_on() {
            steps.push("The computer was already on.".to_string());
            return steps;
        }
        steps.push(self.loader.load());
        steps.push("Powering on the computer.".to_string());
        self.power.set(true);
        debug!("computer powered on");
        steps
    }

    pub fn power_off(&mut self) -> Vec<String> {
        let mut steps = vec!["Checking whether power is on.".to_string()];
        if !self.power.is_on() {
            steps.push("The computer was already off.".to_string());
            return steps;
        }
        steps.push(self.services.stop());
        steps.push("Shutting down the computer.".to_string());
        self.power.set(false);
        debug!("computer powered off");
        steps
    }
}
